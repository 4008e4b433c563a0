use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use seatkit::{
    init_logging, ArrangeStrategy, DesignerState, SeatingReport, SettingsManager, BUILD_DATE,
    VERSION,
};

#[derive(Parser)]
#[command(name = "seatkit")]
#[command(about = "Lay out venue seating and assign guests", long_about = None)]
struct Cli {
    /// Layout configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seat the roster of a project file
    Arrange {
        /// Project file to read
        project: PathBuf,

        /// Ordering used to match guests to seats
        #[arg(long, value_enum, default_value = "importance")]
        by: Strategy,

        /// Where to write the result (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Renumber seat ranks from their position in the hall
    Rerank {
        /// Project file to read
        project: PathBuf,

        /// Where to write the result (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the seating report of a project file
    Report {
        /// Project file to read
        project: PathBuf,
    },
    /// Write the active layout configuration to disk
    InitConfig,
    /// Print version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Importance,
    Position,
}

impl From<Strategy> for ArrangeStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Importance => ArrangeStrategy::Importance,
            Strategy::Position => ArrangeStrategy::Position,
        }
    }
}

fn load_settings(path: Option<PathBuf>) -> anyhow::Result<SettingsManager> {
    let manager = match path {
        Some(path) => SettingsManager::load_or_default(path)?,
        None => SettingsManager::load_default()?,
    };
    manager
        .config()
        .validate()
        .context("Invalid layout configuration")?;
    Ok(manager)
}

fn open_project(settings: &SettingsManager, path: &Path) -> anyhow::Result<DesignerState> {
    let mut state = DesignerState::new(settings.config().clone());
    state
        .load_from_file(path)
        .with_context(|| format!("Failed to open project {}", path.display()))?;
    Ok(state)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let settings = load_settings(cli.config)?;

    match cli.command {
        Command::Arrange {
            project,
            by,
            output,
        } => {
            let mut state = open_project(&settings, &project)?;
            let outcome = state.arrange(by.into());
            state.save_to_file(output.as_deref().unwrap_or(&project))?;
            println!(
                "Seated {} guests, {} seats left empty, {} guests without a seat",
                outcome.assigned, outcome.empty_seats, outcome.unseated
            );
        }
        Command::Rerank { project, output } => {
            let mut state = open_project(&settings, &project)?;
            let ranked = state.rerank_from_geometry();
            state.save_to_file(output.as_deref().unwrap_or(&project))?;
            println!("Ranked {} seats", ranked);
        }
        Command::Report { project } => {
            let state = open_project(&settings, &project)?;
            print!("{}", SeatingReport::build(state.seats(), state.people()));
        }
        Command::InitConfig => {
            settings.save()?;
            println!("Wrote {}", settings.path().display());
        }
        Command::Version => {
            println!("seatkit {} (built {})", VERSION, BUILD_DATE);
        }
    }

    Ok(())
}
