pub mod memory_repository;
pub mod repositories;
