//! Plate-increment rounding.
//!
//! Every weight the engine hands back is snapped to the nearest 0.5 kg.
//! Ties round up (towards positive infinity), so `-0.25` becomes `0.0`
//! rather than `-0.5`.

/// Smallest weight step the engine emits, in kilograms.
pub const WEIGHT_STEP_KG: f64 = 0.5;

/// Round a weight to the nearest 0.5 kg.
pub fn round_to_half(weight: f64) -> f64 {
    let rounded = (weight * 2.0 + 0.5).floor() / 2.0;
    // Normalise -0.0 so it prints as "0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// True when `weight` is an exact multiple of [`WEIGHT_STEP_KG`].
pub fn is_half_step(weight: f64) -> bool {
    (weight * 2.0).fract() == 0.0
}
