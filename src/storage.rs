//! Client-local credential storage.
//!
//! The dispatcher depends on exactly two entries: the session token and a
//! JSON user profile. They live as files under a config directory so the
//! CLI behaves like the browser's localStorage-backed session.

use std::fs;
use std::path::PathBuf;

use crate::types::UserProfile;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    /// Open the default store, honoring `FINBIN_CONFIG_DIR` overrides.
    pub fn open() -> anyhow::Result<Self> {
        let dir = if let Ok(custom_dir) = std::env::var("FINBIN_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            let home = std::env::var("HOME")
                .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
            PathBuf::from(home).join(".config").join("finbin")
        };
        Self::at(dir)
    }

    /// Open a store rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> anyhow::Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    pub fn load_token(&self) -> Option<String> {
        let raw = fs::read_to_string(self.dir.join(TOKEN_FILE)).ok()?;
        let token = raw.trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    pub fn save_token(&self, token: &str) -> anyhow::Result<()> {
        fs::write(self.dir.join(TOKEN_FILE), token)?;
        Ok(())
    }

    /// Load the stored profile; any read or parse failure is `None` and is
    /// surfaced to the user as a generic "information not found" condition.
    pub fn load_profile(&self) -> Option<UserProfile> {
        let raw = fs::read_to_string(self.dir.join(USER_FILE)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(profile)?;
        fs::write(self.dir.join(USER_FILE), content)?;
        Ok(())
    }

    /// Drop both entries; missing files are not an error.
    pub fn clear(&self) -> anyhow::Result<()> {
        for file in [TOKEN_FILE, USER_FILE] {
            let path = self.dir.join(file);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, CredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::at(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_token_round_trip() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load_token(), None);

        store.save_token("demo-token-1-1700000000000").unwrap();
        assert_eq!(store.load_token().as_deref(), Some("demo-token-1-1700000000000"));

        store.clear().unwrap();
        assert_eq!(store.load_token(), None);
    }

    #[test]
    fn test_profile_round_trip_and_corruption() {
        let (dir, store) = temp_store();
        assert!(store.load_profile().is_none());

        let profile = UserProfile {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        };
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile(), Some(profile));

        // Corrupt profile reads as absent, not as an error
        fs::write(dir.path().join("user.json"), "not json").unwrap();
        assert!(store.load_profile().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, store) = temp_store();
        store.clear().unwrap();
        store.clear().unwrap();
    }
}
