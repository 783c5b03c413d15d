#![deny(unsafe_code)]

pub mod error;
pub mod mappings;
pub mod paths;
pub mod schema;

pub use error::StandardsError;
pub use mappings::{entries_for, load_default_mappings, load_mappings, load_mappings_for};
pub use paths::{DATA_ENV_VAR, default_data_root, mappings_path, schema_path};
pub use schema::SchemaTitles;
