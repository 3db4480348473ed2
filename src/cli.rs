use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iconforge")]
#[command(
    author,
    version,
    about = "Resize a source logo into Android launcher icons for every density"
)]
pub struct Cli {
    /// Path to config file (defaults to ./iconforge.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
