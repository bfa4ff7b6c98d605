use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lift_core::*;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lift")]
#[command(about = "Progressive load suggestions for strength training", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Load configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a 1RM from one completed set
    Estimate {
        /// Weight lifted (kg)
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Reps completed
        #[arg(long, allow_negative_numbers = true)]
        reps: i32,
    },

    /// Detect the trend of recent session weights
    Analyze {
        /// Session weights, oldest first (comma separated)
        #[arg(long, value_delimiter = ',')]
        weights: Vec<f64>,

        /// Standard increment (kg), defaults to the configured value
        #[arg(long)]
        increment: Option<f64>,
    },

    /// Suggest the weight for the next set
    Suggest {
        /// Known 1RM (kg)
        #[arg(long, allow_negative_numbers = true)]
        one_rm: Option<f64>,

        /// Target reps
        #[arg(long)]
        reps: Option<i32>,

        /// Target RPE
        #[arg(long)]
        rpe: Option<u8>,

        /// Session weights, oldest first (comma separated)
        #[arg(long, value_delimiter = ',')]
        weights: Vec<f64>,
    },

    /// Summarise one exercise from a set history CSV and suggest the next weight
    History {
        /// CSV file with columns date,exercise,category,weight_kg,reps,completed
        #[arg(long)]
        file: PathBuf,

        /// Exercise name (case-insensitive)
        #[arg(long)]
        exercise: String,

        /// Known 1RM (kg)
        #[arg(long, allow_negative_numbers = true)]
        one_rm: Option<f64>,

        /// Target reps
        #[arg(long)]
        reps: Option<i32>,

        /// Target RPE
        #[arg(long)]
        rpe: Option<u8>,
    },

    /// Count completed sets per category in a date range
    Volume {
        /// CSV file with columns date,exercise,category,weight_kg,reps,completed
        #[arg(long)]
        file: PathBuf,

        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day of the range (YYYY-MM-DD), defaults to today
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        lift_core::logging::init_with_level("debug");
    } else {
        lift_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!("Using suggestion parameters: {:?}", config.suggestion);

    match cli.command {
        Commands::Estimate { weight, reps } => cmd_estimate(weight, reps, cli.json),
        Commands::Analyze { weights, increment } => {
            let increment = increment.unwrap_or(config.suggestion.standard_increment);
            cmd_analyze(&weights, increment, cli.json)
        }
        Commands::Suggest {
            one_rm,
            reps,
            rpe,
            weights,
        } => {
            let reps = reps.unwrap_or(config.suggestion.default_target_reps);
            let rpe = rpe.unwrap_or(config.suggestion.default_target_rpe);
            let suggestion =
                smart_weight_suggestion_with(&config.suggestion, one_rm, reps, &weights, rpe);
            print_suggestion(&suggestion, cli.json)
        }
        Commands::History {
            file,
            exercise,
            one_rm,
            reps,
            rpe,
        } => cmd_history(&file, &exercise, one_rm, reps, rpe, &config, cli.json),
        Commands::Volume { file, from, to } => {
            let to = to.unwrap_or_else(|| chrono::Local::now().date_naive());
            cmd_volume(&file, from, to, cli.json)
        }
    }
}

fn cmd_estimate(weight: f64, reps: i32, as_json: bool) -> Result<()> {
    let one_rm = estimate_one_rm(weight, reps);

    if as_json {
        let out = json!({ "weight_kg": weight, "reps": reps, "one_rm": one_rm });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match one_rm {
        Some(rm) => println!("Estimated 1RM: {} kg ({} kg x {})", rm, weight, reps),
        None => println!(
            "Cannot estimate 1RM from {} kg x {} (needs weight > 0 and 1-10 reps)",
            weight, reps
        ),
    }
    Ok(())
}

fn cmd_analyze(weights: &[f64], increment: f64, as_json: bool) -> Result<()> {
    let result = analyze_progression(weights, increment);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        Some(p) => {
            println!("Sessions:  {}", p.session_count);
            println!("Trend:     {}", p.trend);
            println!("Average:   {} kg", p.average_weight);
            println!("Last:      {} kg", p.last_weight);
            println!("Increment: +{} kg", p.suggested_increase);
        }
        None => println!("No history to analyze."),
    }
    Ok(())
}

fn cmd_history(
    file: &std::path::Path,
    exercise: &str,
    one_rm: Option<f64>,
    reps: Option<i32>,
    rpe: Option<u8>,
    config: &Config,
    as_json: bool,
) -> Result<()> {
    let sets = load_sets_from_csv(file)?;
    let summary = summarize_exercise(&sets, exercise, &config.history);

    let reps = reps.unwrap_or(config.suggestion.default_target_reps);
    let rpe = rpe.unwrap_or(config.suggestion.default_target_rpe);
    let suggestion = match &summary {
        Some(s) => suggest_for_exercise(s, one_rm, reps, rpe, &config.suggestion),
        None => smart_weight_suggestion_with(&config.suggestion, one_rm, reps, &[], rpe),
    };

    if as_json {
        let out = json!({ "summary": summary, "suggestion": suggestion });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match &summary {
        Some(s) => {
            println!("{} ({} sets)", s.exercise, s.set_count);
            println!("  Last used:      {} kg", s.last_used);
            println!("  Best set:       {} kg", s.best_set);
            match s.estimated_one_rm {
                Some(rm) => println!("  Estimated 1RM:  {} kg", rm),
                None => println!("  Estimated 1RM:  -"),
            }
            let recent: Vec<String> = s.recent_weights.iter().map(|w| w.to_string()).collect();
            println!("  Recent:         {}", recent.join(" -> "));
            println!();
        }
        None => {
            println!("No completed sets logged for {}.", exercise);
            let known = lift_core::history::exercise_names(&sets);
            if !known.is_empty() {
                println!("  Known exercises: {}", known.join(", "));
            }
            println!();
        }
    }
    print_suggestion(&suggestion, false)
}

fn cmd_volume(
    file: &std::path::Path,
    from: NaiveDate,
    to: NaiveDate,
    as_json: bool,
) -> Result<()> {
    let sets = load_sets_from_csv(file)?;
    let volume = volume_by_category(&sets, from, to);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&volume)?);
        return Ok(());
    }

    println!("Volume {} .. {}", from, to);
    if volume.is_empty() {
        println!("  No completed sets in range.");
    }
    for v in &volume {
        println!("  {:<16} {} sets", v.category, v.total_sets);
    }
    Ok(())
}

fn print_suggestion(suggestion: &WeightSuggestion, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(suggestion)?);
        return Ok(());
    }

    let sign = if suggestion.increase < 0.0 { "" } else { "+" };
    println!(
        "Suggested: {} kg ({}{} kg)",
        suggestion.suggested_weight, sign, suggestion.increase
    );
    println!("  {}", suggestion.reason);
    Ok(())
}
