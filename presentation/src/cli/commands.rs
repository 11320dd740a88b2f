//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for nakkla-oracle
#[derive(Parser, Debug)]
#[command(name = "nakkla-oracle")]
#[command(author, version, about = "Drakkaen Nakkla quiz analysis endpoint")]
#[command(long_about = r#"
nakkla-oracle serves the generateQuizAnalysis callable endpoint. Each request
carries a list of quiz answers; the loremaster persona and the answers are sent
to Gemini and the resulting analysis is returned to the caller.

The Gemini API key is read from GEMINI_API_KEY (or the variable named by
gemini.api_key_env). A .env file in the working directory is loaded unless
NAKKLA_ENV=production.

Configuration files are loaded from (in priority order):
1. NAKKLA_* environment variables (e.g. NAKKLA_SERVER__BIND)
2. --config <path>     Explicit config file
3. ./nakkla.toml       Project-level config
4. ~/.config/nakkla-oracle/config.toml   Global config

Example:
  nakkla-oracle --bind 0.0.0.0:8080 -v
  nakkla-oracle --config ./deploy/nakkla.toml
"#)]
pub struct Cli {
    /// Address to listen on (overrides server.bind)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
