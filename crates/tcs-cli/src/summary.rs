use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tcs_model::{CellValue, Field};
use tcs_validate::{FieldErrors, ValidationResult};

use tcs_cli::report::{InspectReport, ValidationReport};

pub fn print_inspect(report: &InspectReport, preview_rows: usize) {
    let table = &report.table;
    println!("File: {}", report.file.display());
    println!("Rows: {}", table.row_count());
    if table.is_header_only() {
        println!("Header only: no data rows");
    }

    let mut columns = Table::new();
    columns.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 0, CellAlignment::Right);
    for (index, option) in report.options.iter().enumerate() {
        columns.add_row(vec![dim_cell(index + 1), Cell::new(&option.value)]);
    }
    println!("{columns}");

    if preview_rows > 0 && !table.records.is_empty() {
        let mut preview = Table::new();
        preview.set_header(table.columns.iter().map(header_cell).collect::<Vec<_>>());
        apply_table_style(&mut preview);
        for record in table.records.iter().take(preview_rows) {
            preview.add_row(record.iter().map(|(_, value)| value_cell(value)).collect::<Vec<_>>());
        }
        println!();
        println!("Preview:");
        println!("{preview}");
    }

    if !table.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &table.warnings {
            println!("- {warning}");
        }
    }
}

pub fn print_validation(report: &ValidationReport) {
    println!("File: {}", report.file.display());
    match &report.result {
        ValidationResult::Valid(configuration) => {
            println!("Configuration is valid");
            let mut table = Table::new();
            table.set_header(vec![header_cell("Field"), header_cell("Value")]);
            apply_summary_table_style(&mut table);
            table.add_row(vec![
                Cell::new(Field::ChartType.label()),
                Cell::new(configuration.chart_type.label()),
            ]);
            for (field, values) in [
                (Field::Columns, &configuration.columns),
                (Field::XAxes, &configuration.x_axes),
                (Field::YAxes, &configuration.y_axes),
            ] {
                table.add_row(vec![Cell::new(field.label()), Cell::new(values.join(", "))]);
            }
            println!("{table}");
        }
        ValidationResult::Invalid(errors) => print_field_errors(errors),
    }
}

fn print_field_errors(errors: &FieldErrors) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Rule"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    for (field, issues) in errors.iter() {
        for issue in issues {
            table.add_row(vec![
                Cell::new(field.label())
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                dim_cell(issue.rule().label()),
                Cell::new(issue.message()).fg(Color::Red),
            ]);
        }
    }
    eprintln!("Configuration is invalid ({} issues):", errors.issue_count());
    println!("{table}");
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Empty => dim_cell("-"),
        CellValue::Number(_) => Cell::new(value).set_alignment(CellAlignment::Right),
        CellValue::Text(text) => Cell::new(text),
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
