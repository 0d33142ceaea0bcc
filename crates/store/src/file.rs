use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::KvStore;
use crate::error::StoreError;

/// One JSON document per key under a data directory. Writes land in a
/// temporary file and are renamed into place, so each key's blob is
/// replaced atomically and a crash mid-write leaves the old blob intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;

    #[test]
    fn round_trips_values_per_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert!(store.get("recipes").unwrap().is_none());

        store.set("recipes", "[1,2,3]").unwrap();
        store.set("meals", "{}").unwrap();
        assert_eq!(store.get("recipes").unwrap().as_deref(), Some("[1,2,3]"));
        assert_eq!(store.get("meals").unwrap().as_deref(), Some("{}"));

        store.set("recipes", "[]").unwrap();
        assert_eq!(store.get("recipes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn reopening_sees_previous_writes() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("staples", r#"{"items":[]}"#).unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            store.get("staples").unwrap().as_deref(),
            Some(r#"{"items":[]}"#)
        );
    }

    #[test]
    fn open_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        let mut store = FileStore::open(&nested).unwrap();
        store.set("recipes", "[]").unwrap();
        assert!(nested.join("recipes.json").exists());
    }
}
