pub mod attributes;
pub mod client;
pub mod errors;
