use std::{
    fs::{read_to_string, remove_file, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

pub const DEFAULT_TOKEN_FILE: &str = "t_token";

/// Single-file cache for the bearer token.
///
/// The contents are opaque: whatever was saved is returned verbatim, and a
/// present file is trusted until the API rejects the token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> io::Result<Option<String>> {
        if !self.path.is_file() {
            debug!("No cached token at {}", self.path.display());
            return Ok(None);
        }
        read_to_string(&self.path).map(Some)
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        file.write_all(token.as_bytes())?;
        info!("Cached token at {}", self.path.display());
        Ok(())
    }

    /// Remove the cached token so the next run authenticates from scratch.
    pub fn clear(&self) -> io::Result<()> {
        match remove_file(&self.path) {
            Ok(()) => {
                info!("Removed cached token at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_returns_none_without_file() {
        let dir = tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().join("t_token"));

        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn load_returns_contents_verbatim() {
        let dir = tempdir().expect("tempdir");
        let token_path = dir.path().join("t_token");
        std::fs::write(&token_path, "  token-value \n").expect("write token");

        let store = TokenStore::new(&token_path);
        assert_eq!(store.load().expect("load").as_deref(), Some("  token-value \n"));
    }

    #[test]
    fn save_overwrites_existing_token() {
        let dir = tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().join("t_token"));

        store.save("first-token-that-is-long").expect("save");
        store.save("T2").expect("save");

        assert_eq!(store.load().expect("load").as_deref(), Some("T2"));
    }

    #[test]
    fn clear_deletes_file_and_tolerates_missing() {
        let dir = tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().join("t_token"));
        store.save("T1").expect("save");

        store.clear().expect("clear");
        assert!(!store.path().exists());

        store.clear().expect("second clear is a no-op");
    }
}
