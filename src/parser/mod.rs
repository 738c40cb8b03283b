//! HTML order parsing module.

mod html_parser;
mod options;
mod reconstruct;
mod rows;

pub use html_parser::HtmlParser;
pub use options::{
    ParseOptions, SizePolicy, DEFAULT_MARKER_LABEL, DEFAULT_MIN_DIMENSIONAL_CELLS,
    DEFAULT_SHEATHING_LABEL,
};
pub use reconstruct::{reconstruct, RecordReconstructor};
pub use rows::extract_rows;
