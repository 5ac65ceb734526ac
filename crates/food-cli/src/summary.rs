use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use food_cli::types::RunResult;
use food_core::{DatabaseStats, SourceReport, SourceStatus};

pub fn print_run_summary(result: &RunResult) {
    println!("Profile: {}", result.profile);
    match result.bytes_written {
        Some(bytes) => println!(
            "Database: {} ({:.1} KB)",
            result.database_path.display(),
            bytes as f64 / 1024.0
        ),
        None => println!("Database: {} (dry run, not written)", result.database_path.display()),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Built"),
        header_cell("Duplicates"),
        header_cell("Unnamed"),
        header_cell("No calories"),
        header_cell("Unreadable"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_rows = 0usize;
    let mut total_built = 0usize;
    for report in &result.sources {
        total_rows += report.rows_read;
        total_built += report.built;
        table.add_row(vec![
            source_cell(report),
            status_cell(&report.status),
            Cell::new(report.rows_read),
            Cell::new(report.built),
            count_cell(report.duplicates, Color::Yellow),
            count_cell(report.unnamed, Color::Yellow),
            count_cell(report.missing_calories, Color::Yellow),
            count_cell(report.unreadable, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_built).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    println!(
        "Merged: {} existing + {} new = {} foods ({} duplicates skipped)",
        result.merge.existing, result.merge.added, result.merge.total, result.merge.skipped_duplicates
    );
    print_breakdowns(&result.stats);

    let failures: Vec<_> = result
        .sources
        .iter()
        .filter_map(|report| match &report.status {
            SourceStatus::Failed(message) => Some((report, message)),
            _ => None,
        })
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (report, message) in failures {
            eprintln!("- {} ({}): {message}", report.kind, report.path.display());
        }
    }
}

pub fn print_stats(path: &Path, stats: &DatabaseStats) {
    println!("Database: {}", path.display());
    println!("Total foods: {}", stats.total);
    print_breakdowns(stats);
}

fn print_breakdowns(stats: &DatabaseStats) {
    if stats.total == 0 {
        println!("Database is empty.");
        return;
    }
    println!("{}", breakdown_table("Category", &stats.categories_by_count()));
    println!("{}", breakdown_table("Source", &stats.sources_by_count()));
    if let Some(mean) = stats.mean_confidence {
        println!("Average confidence: {mean:.2}");
    }
}

fn breakdown_table(label: &str, counts: &[(&str, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Foods")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, count) in counts {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn source_cell(report: &SourceReport) -> Cell {
    Cell::new(report.kind.label())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: &SourceStatus) -> Cell {
    match status {
        SourceStatus::Processed => Cell::new("ok").fg(Color::Green),
        SourceStatus::Missing => Cell::new("missing").fg(Color::Yellow),
        SourceStatus::Failed(_) => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
