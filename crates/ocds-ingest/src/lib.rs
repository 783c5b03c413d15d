pub mod csv_table;

pub use csv_table::{
    read_csv_table, read_csv_table_from_reader, write_csv_table, write_csv_table_to_writer,
};
