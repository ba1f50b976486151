use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "vedit")]
#[command(version = "0.1.0")]
#[command(about = "A small modal terminal text editor")]
pub struct CliArgs {
    /// File to open
    pub file: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write log output to this file (set RUST_LOG to control verbosity)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Check if the provided path exists (following symlinks)
    pub fn exists(&self) -> bool {
        if let Some(path) = &self.file {
            std::fs::metadata(path).is_ok()
        } else {
            false
        }
    }
}

pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
