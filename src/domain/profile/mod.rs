// src/domain/profile/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ProfileUpdate, UserProfile};
pub use repository::ProfileRepository;
pub use value_objects::{Bio, ProfilePicture, Username};
