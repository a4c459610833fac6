pub mod cell;
pub mod cell_name;
pub mod dep_graph;
pub mod error;
pub mod formula;
pub mod spreadsheet;

pub use cell::{Cell, CellContent, CellValue};
pub use dep_graph::DependencyGraph;
pub use error::SpreadsheetError;
pub use formula::Formula;
pub use spreadsheet::Spreadsheet;
