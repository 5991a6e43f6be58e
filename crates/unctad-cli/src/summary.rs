use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use unctad_cli::pipeline::StageReport;
use unctad_model::{AggregateExclusions, RegionSet};

pub fn print_summary(reports: &[StageReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Input"),
        header_cell("Rows in"),
        header_cell("Output"),
        header_cell("Rows out"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for report in reports {
        table.add_row(vec![
            Cell::new(report.stage)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(report.input.display()),
            Cell::new(report.input_rows),
            Cell::new(report.output.display()),
            count_cell(report.output_rows),
        ]);
    }
    println!("{table}");
}

pub fn print_regions(regions: &RegionSet, exclusions: &AggregateExclusions) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Members"),
        header_cell("ISO3 codes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for region in regions.iter() {
        let codes: Vec<&str> = region.members.iter().map(String::as_str).collect();
        table.add_row(vec![
            Cell::new(&region.name).add_attribute(Attribute::Bold),
            Cell::new(region.member_count()),
            Cell::new(codes.join(", ")),
        ]);
    }
    println!("{table}");

    let codes: Vec<&str> = exclusions.iso3_codes.iter().map(String::as_str).collect();
    let labels: Vec<&str> = exclusions.country_labels.iter().map(String::as_str).collect();
    println!("Excluded aggregate codes: {}", codes.join(", "));
    println!("Excluded aggregate labels: {}", labels.join(", "));
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}
