pub mod row_computer;
