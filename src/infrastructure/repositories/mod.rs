// src/infrastructure/repositories/mod.rs
mod error;
mod mysql_profile;

pub use error::map_sqlx;
pub use mysql_profile::MySqlProfileRepository;
