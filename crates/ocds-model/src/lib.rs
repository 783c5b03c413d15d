pub mod enums;
pub mod error;
pub mod mapping;
pub mod table;
pub mod warnings;

pub use enums::ReleaseType;
pub use error::ParseReleaseTypeError;
pub use mapping::MappingEntry;
pub use table::{Row, Table};
pub use warnings::{CellWarning, Converted};
