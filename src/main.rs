use clap::Parser;
use flashdeck::core::catalog::{builtin_catalog, load_catalog};
use flashdeck::core::config::{load_config, resolve};
use flashdeck::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashdeck", about = "Vocabulary flashcards in the terminal")]
struct Args {
    /// JSON words file (defaults to the built-in Latin list)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Seed for reproducible shuffles
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to flashdeck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("flashdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("flashdeck: {e}");
            std::process::exit(1);
        }
    };
    let resolved = resolve(&config, args.words.as_deref(), args.seed);
    log::info!("flashdeck starting up with {:?}", resolved);

    let catalog = match &resolved.words_file {
        Some(path) => load_catalog(path),
        None => builtin_catalog(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Error loading words: {}", e);
            eprintln!("flashdeck: {e}");
            std::process::exit(1);
        }
    };

    flashdeck::tui::run(App::from_config(catalog, &resolved), &resolved)
}
