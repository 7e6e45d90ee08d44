use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use drone_rf_detection::calibration::Calibrator;
use drone_rf_detection::config::AppConfig;
use drone_rf_detection::error::ErrorCode;
use drone_rf_detection::report::{self, JsonPlotSink, PlotSink};
use drone_rf_detection::session::{self, RunOutcome};
use drone_rf_detection::PipelineError;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "drone_rf_cli",
    about = "Deterministic drone RF presence simulation and threshold calibration"
)]
struct Cli {
    /// JSON configuration file (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run all three sessions and publish the plots
    Run {
        #[command(flatten)]
        overrides: Overrides,
        /// Skip writing plot artifacts
        #[arg(long)]
        no_plots: bool,
        /// Print a JSON report instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Run only the single-trace detection session
    Single {
        #[command(flatten)]
        overrides: Overrides,
        #[arg(long)]
        json: bool,
    },
    /// Run the feature-space study followed by threshold calibration
    Calibrate {
        #[command(flatten)]
        overrides: Overrides,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as JSON
    DumpConfig {
        #[command(flatten)]
        overrides: Overrides,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct Overrides {
    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the number of paired samples in the feature-space study
    #[arg(long)]
    num_samples: Option<usize>,
    /// Override the plot output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl Overrides {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(num_samples) = self.num_samples {
            config.simulation.num_samples = num_samples;
        }
        if let Some(dir) = &self.output_dir {
            config.report.output_dir = dir.clone();
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            let code = err
                .downcast_ref::<PipelineError>()
                .map(|e| e.code())
                .unwrap_or(1);
            eprintln!("Error code: {code}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    drone_rf_detection::init_logging(match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    });

    let base = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Run {
            overrides,
            no_plots,
            json,
        } => run_all(effective(base, &overrides)?, no_plots, json),
        Commands::Single { overrides, json } => run_single(effective(base, &overrides)?, json),
        Commands::Calibrate { overrides, json } => {
            run_calibrate(effective(base, &overrides)?, json)
        }
        Commands::DumpConfig { overrides } => {
            let config = effective(base, &overrides)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn effective(mut config: AppConfig, overrides: &Overrides) -> Result<AppConfig> {
    overrides.apply(&mut config);
    config.validate().context("validating configuration")?;
    Ok(config)
}

fn run_all(config: AppConfig, no_plots: bool, json: bool) -> Result<ExitCode> {
    let outcome = session::run_all(&config).context("running simulation")?;

    let artifacts = if no_plots {
        Vec::new()
    } else {
        let mut sink = JsonPlotSink::new(&config.report.output_dir);
        publish(&outcome, &mut sink, &config)?;
        sink.written().to_vec()
    };

    if json {
        let report = RunReport {
            outcome: &outcome,
            artifacts,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{outcome}");
        for path in artifacts {
            println!("Saved plot to {}", path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn publish(outcome: &RunOutcome, sink: &mut dyn PlotSink, config: &AppConfig) -> Result<()> {
    report::publish(outcome, sink, &config.report).with_context(|| {
        format!(
            "writing plots to {}",
            config.report.output_dir.display()
        )
    })
}

fn run_single(config: AppConfig, json: bool) -> Result<ExitCode> {
    let calibrator = Calibrator::new(&config.calibration)?;
    let mut rng = session::seeded_rng(config.simulation.seed);
    let outcome = session::single_run(&config.simulation, &calibrator, &mut rng)
        .context("running single-trace detection")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{outcome}");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_calibrate(config: AppConfig, json: bool) -> Result<ExitCode> {
    let calibrator = Calibrator::new(&config.calibration)?;
    let mut rng = session::seeded_rng(config.simulation.seed);
    let features =
        session::feature_space(&config.simulation, &mut rng).context("collecting dataset")?;
    let study =
        session::threshold_study(&features.dataset, &calibrator).context("calibrating")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&study)?);
    } else {
        println!("{features}");
        print!("{study}");
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct RunReport<'a> {
    #[serde(flatten)]
    outcome: &'a RunOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    artifacts: Vec<PathBuf>,
}
