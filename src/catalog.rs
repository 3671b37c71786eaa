pub mod factory;
pub mod repository;
