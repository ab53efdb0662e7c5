use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use oop_design_patterns::harness::ensure_completed;
use oop_design_patterns::logging::init_logger;
use oop_design_patterns::{Catalog, Demo, DemoReport, Runner, Topic, TourConfig, TourError};

#[derive(Parser, Debug)]
#[command(name = "patterns-tour")]
#[command(about = "Runnable tour of OOP principles, SOLID and GoF design patterns")]
struct Cli {
    /// TOML file with tour settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit reports as JSON instead of live output
    #[arg(long, global = true)]
    json: bool,

    #[arg(long, global = true)]
    no_color: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available demos
    List {
        #[arg(long, value_enum)]
        topic: Option<Topic>,
    },
    /// Run the named demos in order
    Run {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Run every demo not skipped in the config
    All,
}

fn load_config(cli: &Cli, catalog: &Catalog) -> Result<TourConfig, TourError> {
    let mut config = match &cli.config {
        Some(path) => TourConfig::load(path).map_err(|source| TourError::ConfigFile {
            path: path.clone(),
            source,
        })?,
        None => TourConfig::default(),
    };
    config.validate(catalog.names())?;
    if cli.no_color {
        config.color = false;
    }
    Ok(config)
}

fn list(catalog: &Catalog, topic: Option<Topic>) {
    let demos: Vec<&Demo> = match topic {
        Some(topic) => catalog.by_topic(topic).collect(),
        None => catalog.iter().collect(),
    };
    for demo in demos {
        println!("{:<18} {:<20} {}", demo.name.bold(), demo.topic.to_string(), demo.summary);
    }
}

fn report(reports: &[DemoReport], json: bool) -> Result<(), TourError> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    }
    ensure_completed(reports)?;
    tracing::info!(demos = reports.len(), "tour finished");
    Ok(())
}

fn execute(cli: &Cli) -> Result<(), TourError> {
    let catalog = Catalog::standard();
    let config = load_config(cli, &catalog)?;
    if !config.color {
        colored::control::set_override(false);
    }
    let runner = if cli.json {
        Runner::quiet(&config)
    } else {
        Runner::live(&config)
    };

    match &cli.command {
        Command::List { topic } => {
            list(&catalog, *topic);
            Ok(())
        }
        Command::Run { names } => {
            let reports = runner.run_named(&catalog, names.as_slice())?;
            report(&reports, cli.json)
        }
        Command::All => report(&runner.run_tour(&catalog), cli.json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
