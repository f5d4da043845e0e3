pub mod errors;
pub mod escape_time;
pub mod fractal_kinds;
pub mod generation_config;
pub mod row_computer;
