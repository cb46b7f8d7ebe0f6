//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_categories, output_report};
use dockpay_app::app::StaffingService;
use dockpay_app::config::Config;
use dockpay_app::input::RawInput;
use dockpay_types::{OutputFormat, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), "using config");

    match &cli.command {
        Commands::Compute {
            category,
            unloaded,
            loaded,
            vehicles,
            staff,
            breakdown,
        } => {
            let raw = RawInput {
                category: category.clone(),
                pieces_unloaded: unloaded.clone(),
                pieces_loaded: loaded.clone(),
                pieces_vehicles: vehicles.clone(),
                staff_available: staff.clone(),
            };
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_compute(&config, &raw, output_format, *breakdown)
        }

        Commands::Categories => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_categories(&config, output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_currency,
            set_ratios_file,
            clear_ratios_file,
            reset,
        } => cmd_config(
            &config_path,
            config,
            *show,
            *set_output,
            set_currency.clone(),
            set_ratios_file.clone(),
            *clear_ratios_file,
            *reset,
        ),
    }
}

fn cmd_compute(
    config: &Config,
    raw: &RawInput,
    output_format: OutputFormat,
    show_breakdown: bool,
) -> Result<()> {
    let service = StaffingService::from_config(config)?;
    let report = service.calculate(raw);
    output_report(output_format, &report, &config.currency, show_breakdown)
}

fn cmd_categories(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = StaffingService::from_config(config)?;
    output_categories(
        output_format,
        &service.categories(),
        service.bonus_rules(),
        &config.currency,
    )
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    config_path: &Path,
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
    set_ratios_file: Option<PathBuf>,
    clear_ratios_file: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency = currency;
        modified = true;
    }

    if let Some(path) = set_ratios_file {
        // Stored absolute so later runs resolve it from any directory
        config.ratios_file = Some(std::path::absolute(&path)?);
        modified = true;
    }

    if clear_ratios_file {
        config.ratios_file = None;
        modified = true;
    }

    if modified {
        // Refuse to save a ratio file that would break every later calculation
        config.calculator()?;
        config.save_to(config_path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}
