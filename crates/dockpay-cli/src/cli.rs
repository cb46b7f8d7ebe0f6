//! CLI definition using clap

use clap::{Parser, Subcommand};
use dockpay_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dockpay")]
#[command(version)]
#[command(about = "Dock staffing efficiency and bonus calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file path (defaults to ~/.config/dockpay/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate staffing and bonus for one shift
    ///
    /// Counts are read like form fields: empty or non-numeric values count as 0.
    Compute {
        /// Cargo company (e.g. "Gnv", "Grimaldi"). Empty gives a zero result.
        #[arg(long, short = 'c', default_value = "")]
        category: String,

        /// Pieces unloaded
        #[arg(long, short = 'u', default_value = "0", allow_hyphen_values = true)]
        unloaded: String,

        /// Pieces loaded
        #[arg(long, short = 'l', default_value = "0", allow_hyphen_values = true)]
        loaded: String,

        /// Vehicle pieces
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        vehicles: String,

        /// Staff available
        #[arg(long, short = 's', default_value = "0", allow_hyphen_values = true)]
        staff: String,

        /// Show staff required per activity
        #[arg(long, short = 'b')]
        breakdown: bool,
    },

    /// List cargo companies, their ratios and the bonus rules
    Categories,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the currency marker shown after the bonus
        #[arg(long)]
        set_currency: Option<String>,

        /// Use a TOML ratio file instead of the built-in table
        #[arg(long)]
        set_ratios_file: Option<PathBuf>,

        /// Go back to the built-in ratio table
        #[arg(long)]
        clear_ratios_file: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
