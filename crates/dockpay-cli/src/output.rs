//! Output formatting module

use dockpay_app::app::{CategoryRow, Report};
use dockpay_domain::BonusRules;
use dockpay_types::{OutputFormat, Result};
use serde::Serialize;

pub fn output_report(
    output_format: OutputFormat,
    report: &Report,
    currency: &str,
    show_breakdown: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        print!("{}", format_report(report, currency, show_breakdown));
    }
    Ok(())
}

/// Table rendering: two decimals everywhere, the deficit shown as an
/// absolute value under a status label.
pub fn format_report(report: &Report, currency: &str, show_breakdown: bool) -> String {
    let result = &report.result;
    let category = if report.input.category.is_empty() {
        "(none)"
    } else {
        report.input.category.as_str()
    };

    let mut out = String::new();
    out.push_str("\nStaffing Result\n");
    out.push_str("===============\n");
    out.push_str(&format!("{:<32}{}\n", "Category:", category));
    out.push_str(&format!("{:<32}{:.2}\n", "Required staff:", result.staff_required));
    out.push_str(&format!(
        "{:<32}{:.2}\n",
        format!("{}:", report.status.label()),
        result.staff_deficit.abs()
    ));
    out.push_str(&format!("{:<32}{:.2}\n", "Extra pieces:", result.extra_pieces));
    out.push_str(&format!(
        "{:<32}{:.2} {}\n",
        "Bonus per employee:", result.bonus_per_employee, currency
    ));

    if show_breakdown {
        out.push_str("\n--- Staff by activity ---\n");
        match report.breakdown {
            Some(b) => {
                out.push_str(&format!("{:<32}{:.2}\n", "Unloading:", b.unload));
                out.push_str(&format!("{:<32}{:.2}\n", "Loading:", b.load));
                out.push_str(&format!("{:<32}{:.2}\n", "Vehicles:", b.vehicles));
            }
            None => out.push_str("(no category selected)\n"),
        }
        out.push_str("-------------------------\n");
    }

    out
}

#[derive(Serialize)]
struct CategoriesJson<'a> {
    categories: &'a [CategoryRow],
    bonus: &'a BonusRules,
}

pub fn output_categories(
    output_format: OutputFormat,
    rows: &[CategoryRow],
    bonus: &BonusRules,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&CategoriesJson {
            categories: rows,
            bonus,
        })?;
        println!("{}", content);
    } else {
        print!("{}", format_categories(rows, bonus, currency));
    }
    Ok(())
}

pub fn format_categories(rows: &[CategoryRow], bonus: &BonusRules, currency: &str) -> String {
    let mut out = String::new();
    out.push_str("\nPieces per staff member\n");
    out.push_str(&"-".repeat(50));
    out.push('\n');
    out.push_str(&format!(
        "{:<20} {:>9} {:>9} {:>9}\n",
        "Company", "Unload", "Load", "Vehicles"
    ));
    out.push_str(&"-".repeat(50));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{:<20} {:>9.2} {:>9.2} {:>9.2}\n",
            row.name, row.unload, row.load, row.vehicles
        ));
    }
    out.push('\n');
    out.push_str("Bonus per extra piece\n");
    out.push_str(&format!(
        "  pieces 1-{}:    {:.2} {}\n",
        bonus.threshold, bonus.low_rate, currency
    ));
    out.push_str(&format!(
        "  pieces {}+:     {:.2} {}\n",
        bonus.threshold + 1,
        bonus.high_rate,
        currency
    ));
    out
}
