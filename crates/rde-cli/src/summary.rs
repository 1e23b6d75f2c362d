//! End-of-run summary table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rde_model::Artifact;

use crate::commands::{ArtifactStatus, WorkbookOutcome};

/// A workbook that failed a fail-fast step, with the error text.
pub type HardFailure = (String, String);

pub fn print_summary(outcomes: &[WorkbookOutcome], hard_failures: &[HardFailure]) {
    if outcomes.is_empty() && hard_failures.is_empty() {
        println!("No workbooks processed.");
        return;
    }

    let mut table = Table::new();
    let mut header = vec![header_cell("Workbook")];
    header.extend(Artifact::all().iter().map(|a| header_cell(a.file_name())));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=Artifact::all().len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Center);
        }
    }

    for outcome in outcomes {
        let mut row = vec![
            Cell::new(&outcome.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(
            Artifact::all()
                .iter()
                .map(|artifact| status_cell(outcome.status(*artifact))),
        );
        table.add_row(row);
    }
    println!("{table}");

    let soft_failures: Vec<(&str, Artifact, &str)> = outcomes
        .iter()
        .flat_map(|outcome| {
            outcome
                .soft_failures
                .iter()
                .map(|(artifact, message)| (outcome.name.as_str(), *artifact, message.as_str()))
        })
        .collect();
    if !soft_failures.is_empty() {
        eprintln!("Skipped artifacts:");
        for (workbook, artifact, message) in soft_failures {
            eprintln!("- {workbook}/{artifact}: {message}");
        }
    }

    if !hard_failures.is_empty() {
        eprintln!("Errors:");
        for (workbook, message) in hard_failures {
            eprintln!("- {workbook}: {message}");
        }
    }
}

fn status_cell(status: Option<ArtifactStatus>) -> Cell {
    match status {
        Some(ArtifactStatus::Written) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(ArtifactStatus::Failed) => Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(ArtifactStatus::Skipped) | None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
