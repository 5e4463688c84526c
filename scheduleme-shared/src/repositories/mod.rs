pub mod configuration_repository;
pub mod user_repository;
