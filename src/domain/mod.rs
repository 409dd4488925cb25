// src/domain/mod.rs
pub mod errors;
pub mod profile;
