//! FemCare Assess CLI Tool
//!
//! Run the PCOS/PCOD risk screen from the command line.
//!
//! Usage:
//!   femcare-assess assess --age <n> --height-cm <n> --weight-kg <n> [--cycle irregular] [--acne ...]
//!   femcare-assess batch <forms.json | ->
//!   femcare-assess bmi --height-cm <n> --weight-kg <n>
//!   femcare-assess weights
//!
//! Weights are read from `--weights <file>` or `FEMCARE_WEIGHTS` (a `.env`
//! file in the working directory is honoured). Log verbosity follows
//! `RUST_LOG`, or `-v` / `-vv` / `-vvv`.

use clap::{ArgAction, Parser, Subcommand};
use femcare_risk::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "femcare-assess")]
#[command(author = "FemCare Health")]
#[command(version = "0.1.0")]
#[command(about = "PCOS/PCOD risk assessment and wellness guide", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: json, compact, or text
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file overriding heuristic weights and thresholds
    #[arg(long, env = "FEMCARE_WEIGHTS")]
    weights: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a single profile given as flags
    Assess(FormArgs),

    /// Assess a JSON array (or single object) of intake forms
    Batch {
        /// JSON file, or '-' for stdin
        input: String,
    },

    /// Calculate BMI and its display category
    Bmi {
        #[arg(long, allow_negative_numbers = true)]
        height_cm: i32,

        #[arg(long, allow_negative_numbers = true)]
        weight_kg: i32,
    },

    /// Print the effective weights configuration
    Weights,
}

#[derive(clap::Args)]
struct FormArgs {
    /// Name used in the greeting
    #[arg(long)]
    name: Option<String>,

    /// Age in years (12-50)
    #[arg(long, default_value_t = 25, allow_negative_numbers = true)]
    age: i32,

    /// Height in cm (120-200)
    #[arg(long, default_value_t = 165, allow_negative_numbers = true)]
    height_cm: i32,

    /// Weight in kg (30-150)
    #[arg(long, default_value_t = 60, allow_negative_numbers = true)]
    weight_kg: i32,

    #[arg(long, value_enum, default_value_t = CycleRegularity::Regular)]
    cycle: CycleRegularity,

    #[arg(long, value_enum, default_value_t = FlowIntensity::Light)]
    flow: FlowIntensity,

    #[arg(long, value_enum, default_value_t = MenstrualPain::None)]
    pain: MenstrualPain,

    /// Acne/oily skin
    #[arg(long)]
    acne: bool,

    /// Excess facial/body hair
    #[arg(long)]
    hair_growth: bool,

    /// Hair thinning/loss
    #[arg(long)]
    hair_loss: bool,

    /// Unexplained weight gain
    #[arg(long)]
    weight_gain: bool,

    /// Food cravings
    #[arg(long)]
    cravings: bool,

    /// Chronic fatigue
    #[arg(long)]
    fatigue: bool,

    /// Mood swings
    #[arg(long)]
    mood_swings: bool,

    /// Dark skin patches
    #[arg(long)]
    dark_skin_patches: bool,
}

impl From<FormArgs> for IntakeForm {
    fn from(args: FormArgs) -> Self {
        IntakeForm {
            name: args.name,
            age: args.age,
            height_cm: args.height_cm,
            weight_kg: args.weight_kg,
            menstrual: MenstrualHistory {
                cycle: args.cycle,
                flow: args.flow,
                pain: args.pain,
            },
            symptoms: Symptoms {
                acne: args.acne,
                hair_growth: args.hair_growth,
                hair_loss: args.hair_loss,
                weight_gain: args.weight_gain,
                cravings: args.cravings,
                fatigue: args.fatigue,
                mood_swings: args.mood_swings,
                dark_skin_patches: args.dark_skin_patches,
            },
        }
    }
}

#[derive(Serialize)]
struct BmiReport {
    height_cm: i32,
    weight_kg: i32,
    bmi: f64,
    category: BmiCategory,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report {
    Single(Box<Assessment>),
    Batch(Vec<BatchEntry>),
    Bmi(BmiReport),
    Weights(HeuristicWeights),
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "assessment failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let weights = match &cli.weights {
        Some(path) => HeuristicWeights::load(path)?,
        None => HeuristicWeights::default(),
    };
    let classifier = HeuristicClassifier::new(weights)?;

    let report = match cli.command {
        Commands::Assess(args) => {
            let form = IntakeForm::from(args);
            Report::Single(Box::new(assess(&form, &classifier)?))
        }
        Commands::Batch { input } => {
            let forms = load_forms(&input)?;
            tracing::info!(count = forms.len(), "assessing batch");
            Report::Batch(assess_all(&forms, &classifier))
        }
        Commands::Bmi { height_cm, weight_kg } => {
            let bmi = body_mass_index(height_cm, weight_kg)?;
            Report::Bmi(BmiReport {
                height_cm,
                weight_kg,
                bmi,
                category: BmiCategory::from_bmi(bmi),
            })
        }
        Commands::Weights => Report::Weights(classifier.weights().clone()),
    };

    let output_str = match cli.format.as_str() {
        "json" => serde_json::to_string_pretty(&report)?,
        "compact" => serde_json::to_string(&report)?,
        "text" => render_text(&report),
        other => {
            tracing::warn!(format = other, "unknown output format, using json");
            serde_json::to_string_pretty(&report)?
        }
    };

    if let Some(output_path) = cli.output {
        fs::write(&output_path, &output_str)?;
        eprintln!("Output written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

/// Read intake forms from a file or stdin; accepts an array or one object
fn load_forms(input: &str) -> Result<Vec<IntakeForm>> {
    let json = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };

    parse_forms(&json)
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    match report {
        Report::Single(assessment) => render_assessment(&mut out, assessment),
        Report::Batch(entries) => {
            for entry in entries {
                let _ = writeln!(out, "=== Form {} ===", entry.index);
                match (&entry.assessment, &entry.error) {
                    (Some(assessment), _) => render_assessment(&mut out, assessment),
                    (None, Some(error)) => {
                        let _ = writeln!(out, "{}", error);
                    }
                    (None, None) => {}
                }
                out.push('\n');
            }
        }
        Report::Bmi(bmi) => {
            let _ = writeln!(out, "BMI: {:.1} ({})", bmi.bmi, bmi.category);
        }
        Report::Weights(weights) => {
            let _ = writeln!(out, "BMI above {}: {}", weights.bmi_threshold, weights.elevated_bmi);
            let _ = writeln!(out, "Age below {}: {}", weights.young_age_below, weights.young_age);
            let _ = writeln!(out, "Irregular cycle: {}", weights.irregular_cycle);
            let _ = writeln!(out, "Hair growth: {}", weights.hair_growth);
            let _ = writeln!(out, "Acne: {}", weights.acne);
            let _ = writeln!(out, "Weight gain: {}", weights.weight_gain);
            let _ = writeln!(out, "Fatigue: {}", weights.fatigue);
            let _ = writeln!(
                out,
                "Thresholds: Medium >= {}, High >= {}",
                weights.thresholds.medium, weights.thresholds.high
            );
        }
    }
    out
}

fn render_assessment(out: &mut String, a: &Assessment) {
    let _ = writeln!(out, "{}", a.greeting);
    let _ = writeln!(out);
    let _ = writeln!(out, "Your PCOS/PCOD Risk: {}", a.risk_label);
    let _ = writeln!(out, "BMI: {:.1} ({})", a.bmi, a.bmi_category);

    if let Some(breakdown) = &a.breakdown {
        if !breakdown.contributions.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Contributing factors:");
            for c in &breakdown.contributions {
                let _ = writeln!(out, "  +{:.1}  {}", c.points, c.factor.description());
            }
        }
        let _ = writeln!(out, "Score: {:.1}", breakdown.score);
    }

    if !a.unscored_findings.is_empty() {
        let _ = writeln!(out, "Also reported (not scored): {}", a.unscored_findings.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Your Personalized Wellness Plan");
    for section in &a.wellness_plan {
        let _ = writeln!(out, "{}", section.title);
        for item in section.items {
            let _ = writeln!(out, "  - {}: {}", item.heading, item.detail);
        }
    }

    if let Some(message) = a.specialist_message {
        let _ = writeln!(out);
        let _ = writeln!(out, "Note: {}", message);
    }
}
