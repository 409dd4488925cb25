pub mod caller;
pub mod identity;
pub mod profile;

pub use caller::CallerContext;
pub use identity::{IdentityAttributes, UserAttribute};
pub use profile::{ProfileView, UpdateProfileRequest};
