// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod identity;
pub mod profile_repo;
pub mod time;

pub use identity::{ScriptedIdentityProvider, VALID_TOKEN};
pub use profile_repo::InMemoryProfileRepo;
pub use time::{FixedClock, fixed_now};
