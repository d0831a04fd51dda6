use super::ui;
use crate::core::config::AppConfig;
use crate::core::housing::Outcome;
use crate::core::ranking::{self, Report};
use anyhow::Result;
use std::io::{self, Write};
use tracing::info;

/// How each day's leaders are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    #[default]
    Plain,
    Table,
}

pub fn run(config: &AppConfig, style: ReportStyle) -> Result<()> {
    info!(
        horizon_days = config.horizon_days,
        top_n = config.top_n,
        "Projecting outcomes"
    );
    let report = ranking::build_report(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match style {
        ReportStyle::Plain => write_plain(&mut out, &report)?,
        ReportStyle::Table => write_tables(&mut out, &report, config.initial_balance())?,
    }
    out.flush()?;
    Ok(())
}

fn outcome_line(outcome: &Outcome) -> String {
    format!(
        "Cat Cages: {}, Dog Runs: {}, Balance: {}",
        outcome.allocation.cat_cages, outcome.allocation.dog_runs, outcome.final_balance
    )
}

/// Writes the line-oriented report: the option count, then a block per day.
pub fn write_plain<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "Total Options Considered: {}", report.option_count)?;
    for day in &report.days {
        writeln!(out, "Day {}:", day.day)?;
        for outcome in &day.top {
            writeln!(out, "{}", outcome_line(outcome))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes one table per day, with losses against `initial_balance` in red.
pub fn write_tables<W: Write>(out: &mut W, report: &Report, initial_balance: f64) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        ui::style_text("Total Options Considered:", ui::StyleType::TotalLabel),
        report.option_count
    )?;

    for day in &report.days {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Rank"),
            ui::header_cell("Cat Cages"),
            ui::header_cell("Dog Runs"),
            ui::header_cell("Balance"),
        ]);
        for (rank, outcome) in day.top.iter().enumerate() {
            table.add_row(vec![
                ui::count_cell(rank as u32 + 1),
                ui::count_cell(outcome.allocation.cat_cages),
                ui::count_cell(outcome.allocation.dog_runs),
                ui::balance_cell(outcome.final_balance, initial_balance),
            ]);
        }

        writeln!(
            out,
            "\n{}",
            ui::style_text(&format!("Day {}", day.day), ui::StyleType::Title)
        )?;
        writeln!(out, "{table}")?;
    }

    writeln!(
        out,
        "\n{}",
        ui::style_text(
            &format!("Starting balance: {initial_balance}"),
            ui::StyleType::Subtle
        )
    )?;
    Ok(())
}
