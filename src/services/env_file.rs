//! Env-style settings file exposed as a merge layer.
use std::path::Path;

use config::{ConfigError, Map, Source, Value, ValueKind};

use crate::domain::SettingKey;
use crate::services::{LoadError, LoadResult};

/// Recognized entries read from a `KEY=VALUE` file.
#[derive(Clone, Debug, Default)]
pub struct EnvFileSource {
    origin: String,
    entries: Vec<(SettingKey, String)>,
}

impl EnvFileSource {
    /// Parse the file at `path` without touching the process environment.
    ///
    /// Returns `Ok(None)` when the file does not exist. Unrecognized keys are skipped.
    pub fn read(path: &Path) -> LoadResult<Option<Self>> {
        let source_error = |source| LoadError::Source {
            path: path.to_path_buf(),
            source,
        };

        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(err) if err.not_found() => return Ok(None),
            Err(err) => return Err(source_error(err)),
        };

        let mut entries = Vec::new();
        for item in iter {
            let (name, value) = item.map_err(source_error)?;
            match SettingKey::from_file_key(&name) {
                Some(key) => entries.push((key, value)),
                None => log::trace!("Skipping unrecognized key {name} in {}", path.display()),
            }
        }

        Ok(Some(Self {
            origin: path.display().to_string(),
            entries,
        }))
    }

    /// Value for `key`; a later line overrides an earlier one.
    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Source for EnvFileSource {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let mut map = Map::new();
        for (key, value) in &self.entries {
            map.insert(
                key.config_key().to_string(),
                Value::new(Some(&self.origin), ValueKind::String(value.clone())),
            );
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_is_none() {
        let tmp = TempDir::new().expect("tmp");
        let source = EnvFileSource::read(&tmp.path().join(".env")).expect("read");
        assert!(source.is_none());
    }

    #[test]
    fn reads_recognized_keys_only() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        fs::write(
            &path,
            "# local settings\nPORT=9000\nUNRELATED=1\nexport DB_name=todos\nMONGO_URI=\"mongodb://x\"\n",
        )
        .expect("write");

        let source = EnvFileSource::read(&path).expect("read").expect("present");
        assert_eq!(source.len(), 3);
        assert_eq!(source.get(SettingKey::Port), Some("9000"));
        assert_eq!(source.get(SettingKey::DbName), Some("todos"));
        assert_eq!(source.get(SettingKey::MongoUri), Some("mongodb://x"));
        assert_eq!(source.get(SettingKey::RedisAddr), None);
    }

    #[test]
    fn later_duplicate_wins() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        fs::write(&path, "PORT=1\nPORT=2\n").expect("write");

        let source = EnvFileSource::read(&path).expect("read").expect("present");
        assert_eq!(source.get(SettingKey::Port), Some("2"));

        let collected = source.collect().expect("collect");
        let port = collected.get("port").expect("port").clone();
        assert_eq!(port.into_string().expect("string"), "2");
    }

    #[test]
    fn malformed_file_is_source_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        fs::write(&path, "PORT=8080\nthis line is not valid\n").expect("write");

        let err = EnvFileSource::read(&path).expect_err("malformed");
        assert!(matches!(err, LoadError::Source { .. }));
    }

    #[test]
    fn directory_in_place_of_file_is_source_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        fs::create_dir(&path).expect("mkdir");

        assert!(EnvFileSource::read(&path).is_err());
    }
}
