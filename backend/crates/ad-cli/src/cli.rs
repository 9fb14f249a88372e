use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "admin-board")]
#[command(about = "Admin dashboard stores driven by JSON lines on stdin")]
#[command(version)]
pub struct Cli {
    /// Config directory (overrides AD_CONFIG_DIR and ./.admin)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Pretty-print JSON responses
    #[arg(long)]
    pub pretty: bool,

    /// Log level (overrides config and AD_LOG_LEVEL)
    #[arg(long)]
    pub log_level: Option<String>,
}
