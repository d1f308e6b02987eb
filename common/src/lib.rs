pub mod macros;

pub mod db;
pub mod error;
pub mod models;
pub mod utils;
pub mod validation;
