use anyhow::Result;
use comfy_table::Table;

use tcs_core::Settings;
use tcs_ingest::ParseOptions;
use tcs_model::{ChartDraft, ChartType};

use tcs_cli::report::{InspectReport, ValidationReport, inspect_file, validate_file};

use crate::cli::{InspectArgs, ParseArgs, ValidateArgs};
use crate::summary::apply_table_style;

pub fn run_chart_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Value", "Label"]);
    apply_table_style(&mut table);
    for chart_type in ChartType::all() {
        table.add_row(vec![chart_type.as_str(), chart_type.label()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_inspect(args: &InspectArgs, mut settings: Settings) -> Result<InspectReport> {
    apply_parse_args(&args.parse, &mut settings.ingest);
    inspect_file(&args.file, settings)
}

pub fn run_validate(args: &ValidateArgs, mut settings: Settings) -> Result<ValidationReport> {
    apply_parse_args(&args.parse, &mut settings.ingest);
    let draft = ChartDraft {
        chart_type: args.chart_type.clone(),
        columns: args.columns.clone(),
        x_axes: args.x_axes.clone(),
        y_axes: args.y_axes.clone(),
    };
    validate_file(&args.file, draft, settings)
}

fn apply_parse_args(args: &ParseArgs, options: &mut ParseOptions) {
    if let Some(delimiter) = args.delimiter {
        options.delimiter = Some(delimiter);
    }
    if args.no_header {
        options.has_header = false;
    }
    if args.dynamic_typing {
        options.dynamic_typing = true;
    }
}
