use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use stringsheet_cli::{
    Direction, Overrides, describe, load_config, resolve_options, run_convert_command,
    run_dump_command,
};
use tracing_subscriber::EnvFilter;

/// Convert Android `values-xx/strings.xml` folders to a single translation
/// CSV and back.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    /// Config file [default: ./stringsheet.toml when present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every folder and file touched
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an Android `res` folder to a CSV file.
    #[command(name = "xml2csv")]
    XmlToCsv {
        /// The `res` folder holding the `values-xx` folders
        from: PathBuf,
        /// The CSV file to create
        to: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Convert a CSV file to Android `values-xx` folders.
    #[command(name = "csv2xml")]
    CsvToXml {
        /// The CSV file to read
        from: PathBuf,
        /// The folder receiving the `values-xx` folders
        to: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print the strings of a `res` folder or CSV file as JSON.
    Dump {
        /// A `res` folder or a CSV file
        from: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.commands {
        Commands::XmlToCsv {
            from,
            to,
            overrides,
        } => convert(
            Direction::XmlToCsv,
            &from,
            &to,
            args.config.as_deref(),
            &overrides,
        ),
        Commands::CsvToXml {
            from,
            to,
            overrides,
        } => convert(
            Direction::CsvToXml,
            &from,
            &to,
            args.config.as_deref(),
            &overrides,
        ),
        Commands::Dump { from, overrides } => {
            let options = options_or_exit(args.config.as_deref(), &overrides);
            match run_dump_command(&from, options) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn convert(
    direction: Direction,
    from: &Path,
    to: &Path,
    config: Option<&Path>,
    overrides: &Overrides,
) {
    let options = options_or_exit(config, overrides);
    println!("Converting {} to {}...", from.display(), to.display());
    match run_convert_command(direction, from, to, options) {
        Ok(summary) => println!("✅ Successfully converted ({})", describe(&summary)),
        Err(e) => {
            println!("❌ Conversion failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn options_or_exit(config: Option<&Path>, overrides: &Overrides) -> stringsheet::ConvertOptions {
    let resolved = std::env::current_dir()
        .map_err(|e| format!("Cannot determine working directory: {}", e))
        .and_then(|dir| load_config(config, &dir))
        .and_then(|file| resolve_options(file, overrides));
    match resolved {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
