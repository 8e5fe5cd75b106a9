//! Header row normalization.

use tcs_model::{ColumnSet, ParseWarning};

/// Column layout resolved from the first record.
#[derive(Debug, Clone)]
pub struct HeaderLayout {
    /// Column name for each physical position, duplicates included.
    pub positions: Vec<String>,
    /// Deduplicated columns in first-appearance order.
    pub columns: ColumnSet,
}

impl HeaderLayout {
    /// Number of physical header cells.
    pub fn width(&self) -> usize {
        self.positions.len()
    }
}

/// Normalizes a header value by trimming whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().to_string()
}

/// Name given to a blank header cell (1-based position).
pub fn blank_header_name(position: usize) -> String {
    format!("Column {position}")
}

/// Builds the layout from header cells, recording warnings for blank and
/// repeated names.
pub fn layout_from_header<'a>(
    cells: impl IntoIterator<Item = &'a str>,
    warnings: &mut Vec<ParseWarning>,
) -> HeaderLayout {
    let positions: Vec<String> = cells
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = normalize_header(cell);
            if name.is_empty() {
                let assigned = blank_header_name(idx + 1);
                warnings.push(ParseWarning::BlankHeader {
                    position: idx + 1,
                    assigned: assigned.clone(),
                });
                assigned
            } else {
                name
            }
        })
        .collect();

    let (columns, duplicates) = ColumnSet::from_header(positions.iter().cloned());
    warnings.extend(
        duplicates
            .into_iter()
            .map(|column| ParseWarning::DuplicateHeader { column }),
    );

    HeaderLayout { positions, columns }
}

/// Builds a positional layout (`0`, `1`, ...) for header-less input.
pub fn positional_layout(width: usize) -> HeaderLayout {
    let positions: Vec<String> = (0..width).map(|idx| idx.to_string()).collect();
    let (columns, _) = ColumnSet::from_header(positions.iter().cloned());
    HeaderLayout { positions, columns }
}
