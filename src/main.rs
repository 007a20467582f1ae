use std::path::PathBuf;
use std::process::exit;
use std::{env, fs};

use clap::{Parser, Subcommand, ValueEnum};

use brddefs::{export, BoardDefinition, BoardRegistry};

#[macro_use]
extern crate log;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("no board selected (pass a board id or set the BOARD environment variable)")]
    NoBoard,
    #[error("{0}")]
    Query(#[from] brddefs::QueryError),
    #[error("{0}")]
    Registry(#[from] brddefs::RegistryError),
    #[error("{0}")]
    Export(#[from] brddefs::ExportError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

/// Query FPGA board pin definitions and bus capacity constants.
#[derive(Parser)]
#[command(name = "brdinfo", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the known board ids
    List,
    /// Show a board's pin table and capacity constants
    Show {
        /// Board id (defaults to the BOARD environment variable)
        board: Option<String>,
    },
    /// Export a board definition for the bus generator
    Export {
        /// Board id (defaults to the BOARD environment variable)
        board: Option<String>,
        /// Output layout
        #[arg(long, value_enum, default_value = "header")]
        format: Format,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Verilog `brddefs.h`-style header
    Header,
    /// Structured TOML record
    Toml,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = try_main() {
        log::error!("{}", e);
        exit(1);
    }
}

fn try_main() -> CliResult<()> {
    let cli = Cli::parse();
    let registry = BoardRegistry::builtin()?;

    match cli.command {
        Command::List => {
            for id in registry.list_ids() {
                println!("{}", id);
            }
            Ok(())
        }
        Command::Show { board } => {
            let def = select_board(&registry, board)?;
            show_board(def);
            Ok(())
        }
        Command::Export {
            board,
            format,
            output,
        } => {
            let def = select_board(&registry, board)?;
            let text = match format {
                Format::Header => export::to_verilog_header(def),
                Format::Toml => export::to_toml(def)?,
            };
            match output {
                Some(path) => {
                    fs::write(&path, text)?;
                    info!("wrote {} definition to {}", def.board_id(), path.display());
                }
                None => print!("{}", text),
            }
            Ok(())
        }
    }
}

/// Resolve the board from the argument or the BOARD environment
/// variable, then look it up. An unknown id surfaces the valid ids.
fn select_board<'a>(
    registry: &'a BoardRegistry,
    arg: Option<String>,
) -> CliResult<&'a BoardDefinition> {
    let board_id = match arg.or_else(|| env::var("BOARD").ok()) {
        Some(id) => id,
        None => return Err(CliError::NoBoard),
    };
    Ok(registry.find(&board_id)?)
}

fn show_board(def: &BoardDefinition) {
    println!("Board: {}", def.board_id());
    println!();
    for (role, index) in def.pins() {
        println!("  {:<10} {}", role.as_str(), index);
    }
    println!();
    println!("  {:<10} {}", "MX_IO", def.highest_io_slot());
    println!("  {:<10} {}", "NUM_CORE", def.peripheral_capacity());
    println!("  {:<10} {}", "MX_PCPIN", def.connector_pin_budget());
}
