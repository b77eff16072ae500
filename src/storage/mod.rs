pub mod json_backend;

use std::path::PathBuf;

use crate::{domain::UserProfile, errors::ProfileError};

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Abstraction over whatever persists the user's finance snapshot.
///
/// The engine only ever reads a complete [`UserProfile`]; translation from the
/// backing representation is the store's job.
pub trait ProfileStore: Send + Sync {
    fn load(&self, name: &str) -> Result<UserProfile>;
    fn save(&self, profile: &UserProfile, name: &str) -> Result<PathBuf>;
    fn list(&self) -> Result<Vec<String>>;
}

pub use json_backend::{load_profile_from_path, save_profile_to_path, JsonProfileStore};
