// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `updatedAt` stamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
