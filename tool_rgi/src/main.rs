mod convert;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lib_rgi::constants::FORMAT_NAME;
use lib_rgi::iconset::file::{load_iconset, save_iconset};
use lib_rgi::IconSet;

use crate::convert::{write_output, ToolError};

#[derive(Parser)]
#[command(name = "rgi-tool", version, about = "Batch tools for rGI icon-set files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a blank icon-set file
    New {
        output: PathBuf,
        /// Number of icons in the set
        #[arg(long, default_value_t = 256)]
        count: u16,
        /// Icon side length in pixels
        #[arg(long, default_value_t = 16)]
        size: u16,
    },
    /// Print a summary of an icon-set file
    Info { input: PathBuf },
    /// Convert an icon-set file to .rgi, .png or .h output
    Convert {
        input: PathBuf,
        output: PathBuf,
        /// Grid columns for the .png sheet
        #[arg(long, default_value_t = 16)]
        icons_per_row: u16,
        /// Blank pixels around each icon in the .png sheet
        #[arg(long, default_value_t = 1)]
        padding: u16,
    },
}

fn main() -> ExitCode {
    lib_rgi::init_logging();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), ToolError> {
    match command {
        Command::New {
            output,
            count,
            size,
        } => {
            let set = IconSet::new(count, size)?;
            save_iconset(&output, &set)?;
            println!(
                "created {} with {} blank {}x{} icons",
                output.display(),
                count,
                size,
                size
            );
            Ok(())
        }
        Command::Info { input } => {
            let set = load_iconset(&input)?;
            println!(
                "{}: {} icons, {}x{} pixels",
                FORMAT_NAME,
                set.icon_count(),
                set.icon_size(),
                set.icon_size()
            );
            for id in 0..set.icon_count() {
                println!("  {:>3}  {}", id, set.display_name(id)?);
            }
            Ok(())
        }
        Command::Convert {
            input,
            output,
            icons_per_row,
            padding,
        } => {
            let set = load_iconset(&input)?;
            write_output(&set, &output, icons_per_row, padding)
        }
    }
}
