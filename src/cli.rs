use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// 敏感词过滤服务 — sensitive-word filter service.
#[derive(Parser)]
#[command(name = "sensitive", version, about = "Sensitive-word filter service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the service from a TOML config file
    Config {
        /// Path to the config file
        #[arg(short = 'c', long = "path")]
        path: PathBuf,
    },
    /// Start the service from command-line flags
    Flag {
        /// Port to serve on
        #[arg(short = 'o', long = "port")]
        port: u16,
        /// Dictionary path or URL, loaded at startup if given
        #[arg(short = 'p', long = "path")]
        path: Option<String>,
    },
}
