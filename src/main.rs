use clap::{Parser, Subcommand};
use keyevolve::error::KeResult;
use keyevolve::frequency::FrequencyTable;
use keyevolve::geometry::KeyboardGeometry;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Keyboard geometry JSON (defaults to the built-in 30-key grid)
    #[arg(global = true, short = 'k', long)]
    keyboard: Option<String>,

    /// Character weights as `char<TAB>weight` rows (defaults to English letters)
    #[arg(global = true, short = 'f', long)]
    frequencies: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Score(cmd::score::ScoreArgs),
}

fn load_inputs(cli: &Cli) -> KeResult<(KeyboardGeometry, FrequencyTable)> {
    let geometry = match &cli.keyboard {
        Some(path) => {
            info!("📂 Loading Keyboard: {}", path);
            KeyboardGeometry::load_from_file(path)?
        }
        None => KeyboardGeometry::standard(),
    };

    let frequencies = match &cli.frequencies {
        Some(path) => {
            info!("📂 Loading Frequencies: {}", path);
            FrequencyTable::load_from_file(path)?
        }
        None => FrequencyTable::english(),
    };

    Ok((geometry, frequencies))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let (geometry, frequencies) = load_inputs(&cli).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args, geometry, frequencies),
        Commands::Score(args) => cmd::score::run(args, &geometry, &frequencies),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
