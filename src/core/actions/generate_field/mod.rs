pub mod errors;
#[allow(clippy::module_inception)]
pub mod generate_field;
pub mod ports;
pub mod worker_pool;
