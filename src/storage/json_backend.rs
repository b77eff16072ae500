use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::domain::UserProfile;
use crate::utils::app_data_dir;

use super::{ProfileStore, Result};

const PROFILE_DIR: &str = "profiles";
const PROFILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores profiles as pretty-printed JSON files under a root directory.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    root: PathBuf,
}

impl JsonProfileStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| app_data_dir().join(PROFILE_DIR));
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", slugify(name), PROFILE_EXTENSION))
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self, name: &str) -> Result<UserProfile> {
        load_profile_from_path(&self.profile_path(name))
    }

    fn save(&self, profile: &UserProfile, name: &str) -> Result<PathBuf> {
        let path = self.profile_path(name);
        save_profile_to_path(profile, &path)?;
        Ok(path)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Writes the profile to `path` through a temporary sibling file.
pub fn save_profile_to_path(profile: &UserProfile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(profile)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "Saved profile");
    Ok(())
}

/// Reads and validates a profile snapshot.
pub fn load_profile_from_path(path: &Path) -> Result<UserProfile> {
    let data = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&data)?;
    profile.validate()?;
    debug!(
        path = %path.display(),
        pots = profile.pots.len(),
        expenses = profile.expenses.len(),
        "Loaded profile"
    );
    Ok(profile)
}

fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !slug.is_empty() && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "profile".into()
    } else {
        trimmed.to_string()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
