pub mod discover;
pub mod export;
pub mod generate;
pub mod repository;
