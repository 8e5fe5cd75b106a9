//! CSV reading utilities.

mod header;
mod reader;
mod scan;

pub use header::normalize_header;
pub use reader::{check_file_size_with_limit, parse_table, read_table};
pub use scan::{CANDIDATE_DELIMITERS, detect_delimiter};
