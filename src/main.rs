//! Receipt Reader - command-line front end
//!
//! Loads a frame's OCR detections from a JSON file, puts them in reading
//! order and extracts the receipt fields.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use receipt_reader::config::{self, AppConfig};
use receipt_reader::storage::{self, detection_file};
use receipt_reader::{read_receipt, sort_reading_order, FieldPatterns, FieldValidation, ReaderError};

/// Receipt Reader - order OCR text blocks and extract receipt fields
#[derive(Parser, Debug)]
#[command(name = "receipt-reader")]
#[command(about = "Reading-order reconstruction and receipt field extraction for OCR detections")]
struct Args {
    /// Path to config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print detected text blocks in reading order
    Sort {
        /// JSON detection file
        detections: PathBuf,
    },
    /// Extract name, quantity and price from a detection file
    Extract {
        /// JSON detection file
        detections: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_path = storage::default_config_path();
    let (config, config_source) =
        config::resolve_config(args.config.as_deref(), default_path.as_deref())?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &config_source {
        Some(path) => info!("Loaded configuration from {:?}", path),
        None => info!("Using default configuration"),
    }

    match args.command {
        Command::Sort { detections } => run_sort(&detections),
        Command::Extract { detections } => run_extract(&detections, &config),
    }
}

fn run_sort(path: &Path) -> Result<ExitCode> {
    let store = detection_file::load_detections(path)?;
    let ordered = sort_reading_order(store.snapshot());

    info!("Ordered {} of {} text blocks", ordered.len(), store.len());

    for (index, item) in ordered.iter().enumerate() {
        println!(
            "{:>3}  top={:<5} left={:<5} {:?}",
            index, item.bounds.top, item.bounds.left, item.value
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn run_extract(path: &Path, config: &AppConfig) -> Result<ExitCode> {
    let patterns = FieldPatterns::compile(&config.fields)?;
    let store = detection_file::load_detections(path)?;

    let fields = match read_receipt(&store) {
        Ok(fields) => fields,
        Err(e @ ReaderError::InsufficientDetections { .. }) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let validation = FieldValidation::check(&fields, &patterns);

    println!("name:     {}", fields.name.replace('\n', " | "));
    println!("quantity: {}", fields.quantity.replace('\n', " | "));
    println!("price:    {}", fields.price.replace('\n', " | "));
    println!(
        "valid lines - name: {}, quantity: {}, price: {}",
        validation.valid_names, validation.valid_quantities, validation.valid_prices
    );

    Ok(ExitCode::SUCCESS)
}
