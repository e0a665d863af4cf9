use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addr_cli::pipeline::NormalizeOutcome;
use addr_normalization::NormalizationStats;

pub fn print_summary(outcome: &NormalizeOutcome) {
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: -"),
    }
    let stats = &outcome.run.stats;
    println!("{}", stats_table(stats));
    if !stats.corrections.is_empty() {
        println!();
        println!("Street types:");
        println!("{}", corrections_table(stats));
    }
    if !stats.skipped_rows.is_empty() {
        eprintln!("Skipped rows:");
        for skipped in &stats.skipped_rows {
            eprintln!("- row {}: {} field(s)", skipped.row, skipped.field_count);
        }
    }
}

fn stats_table(stats: &NormalizationStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Data rows"), Cell::new(stats.data_rows)]);
    table.add_row(vec![
        Cell::new("Records").add_attribute(Attribute::Bold),
        Cell::new(stats.records).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Skipped rows"),
        count_cell(stats.skipped_rows.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Empty addresses"),
        count_cell(stats.empty_addresses, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Truncated addresses"),
        count_cell(stats.truncated_addresses, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Corrections"),
        count_cell(stats.total_corrections(), Color::Green),
    ]);
    table
}

fn corrections_table(stats: &NormalizationStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Street type"), header_cell("Corrections")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (canonical, count) in &stats.corrections {
        table.add_row(vec![
            Cell::new(canonical.to_uppercase())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total_corrections()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
