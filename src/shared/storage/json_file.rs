use serde::{de::DeserializeOwned, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Content hash of a stored document. Changes whenever the bytes on disk change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn of(bytes: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strong entity tag, quoted as HTTP expects.
    pub fn to_etag(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Accepts `"abc"`, `W/"abc"` and bare `abc`.
    pub fn from_etag(raw: &str) -> Option<Self> {
        let value = raw.trim();
        let value = value.strip_prefix("W/").unwrap_or(value);
        let value = value.trim_matches('"');
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }
}

/// An `If-Match` precondition on a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IfMatch {
    /// `*`: any stored revision will do, but the document has to exist.
    Any,
    /// The stored revision has to be one of these.
    OneOf(Vec<Revision>),
}

impl IfMatch {
    /// Parses `*` or a comma-separated list of entity tags.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == "*" {
            return Some(IfMatch::Any);
        }
        raw.split(',')
            .map(Revision::from_etag)
            .collect::<Option<Vec<_>>>()
            .map(IfMatch::OneOf)
    }

    pub fn matches(&self, current: Option<&Revision>) -> bool {
        match (self, current) {
            (_, None) => false,
            (IfMatch::Any, Some(_)) => true,
            (IfMatch::OneOf(revisions), Some(current)) => revisions.contains(current),
        }
    }
}

impl From<Revision> for IfMatch {
    fn from(revision: Revision) -> Self {
        IfMatch::OneOf(vec![revision])
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub value: T,
    pub revision: Revision,
}

#[derive(Debug, Clone, Error)]
pub enum JsonFileError {
    #[error("{0} does not exist")]
    NotFound(String),

    #[error("{path} is not valid JSON for this document: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("document changed since it was read")]
    Conflict,
}

/// A JSON document persisted as a single file.
///
/// Reads never take the lock: writers replace the file through a rename, so a
/// reader sees either the previous or the next complete document. Writers are
/// serialized through `write_lock`, which makes read-modify-write sequences
/// issued through [`JsonFile::update`] atomic with respect to each other.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    pub async fn read<T: DeserializeOwned>(&self) -> Result<Snapshot<T>, JsonFileError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                JsonFileError::NotFound(self.display_path())
            } else {
                JsonFileError::ReadFailed {
                    path: self.display_path(),
                    reason: e.to_string(),
                }
            }
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| JsonFileError::Corrupt {
            path: self.display_path(),
            reason: e.to_string(),
        })?;

        Ok(Snapshot {
            value,
            revision: Revision::of(&bytes),
        })
    }

    /// Reads the document, first writing `init()` if the file is missing.
    pub async fn read_or_init<T, F>(&self, init: F) -> Result<Snapshot<T>, JsonFileError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.read().await {
            Err(JsonFileError::NotFound(_)) => {}
            other => return other,
        }

        let _guard = self.write_lock.lock().await;
        // another writer may have created it while we waited
        match self.read().await {
            Err(JsonFileError::NotFound(_)) => {
                let value = init();
                let revision = self.persist(&value).await?;
                tracing::info!(path = %self.display_path(), "Initialized JSON document");
                Ok(Snapshot { value, revision })
            }
            other => other,
        }
    }

    /// Replaces the whole document. With `expected` set, the write only goes
    /// through when the file's current revision satisfies it.
    pub async fn write<T: Serialize>(
        &self,
        value: &T,
        expected: Option<&IfMatch>,
    ) -> Result<Revision, JsonFileError> {
        let _guard = self.write_lock.lock().await;

        if let Some(expected) = expected {
            let current = match tokio::fs::read(&self.path).await {
                Ok(bytes) => Some(Revision::of(&bytes)),
                Err(e) if e.kind() == ErrorKind::NotFound => None,
                Err(e) => {
                    return Err(JsonFileError::ReadFailed {
                        path: self.display_path(),
                        reason: e.to_string(),
                    })
                }
            };
            if !expected.matches(current.as_ref()) {
                return Err(JsonFileError::Conflict);
            }
        }

        self.persist(value).await
    }

    /// Read-modify-write under the writer lock. A missing file is `NotFound`.
    pub async fn update<T, R, E, F>(&self, mutate: F) -> Result<(R, Revision), E>
    where
        T: Serialize + DeserializeOwned,
        E: From<JsonFileError>,
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        self.modify(None::<fn() -> T>, mutate).await
    }

    /// Like [`JsonFile::update`], starting from `T::default()` when the file is missing.
    pub async fn update_or_default<T, R, E, F>(&self, mutate: F) -> Result<(R, Revision), E>
    where
        T: Serialize + DeserializeOwned + Default,
        E: From<JsonFileError>,
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        self.modify(Some(T::default), mutate).await
    }

    async fn modify<T, R, E, D, F>(&self, fallback: Option<D>, mutate: F) -> Result<(R, Revision), E>
    where
        T: Serialize + DeserializeOwned,
        E: From<JsonFileError>,
        D: FnOnce() -> T,
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        let _guard = self.write_lock.lock().await;

        let (mut value, before) = match self.read::<T>().await {
            Ok(snapshot) => (snapshot.value, Some(snapshot.revision)),
            Err(JsonFileError::NotFound(path)) => match fallback {
                Some(default) => (default(), None),
                None => return Err(JsonFileError::NotFound(path).into()),
            },
            Err(e) => return Err(e.into()),
        };

        let outcome = mutate(&mut value)?;

        let bytes = self.encode(&value)?;
        let after = Revision::of(&bytes);
        if before.as_ref() == Some(&after) {
            return Ok((outcome, after));
        }

        self.replace_file(&bytes).await?;
        Ok((outcome, after))
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, JsonFileError> {
        serde_json::to_vec_pretty(value).map_err(|e| JsonFileError::WriteFailed {
            path: self.display_path(),
            reason: e.to_string(),
        })
    }

    async fn persist<T: Serialize>(&self, value: &T) -> Result<Revision, JsonFileError> {
        let bytes = self.encode(value)?;
        self.replace_file(&bytes).await?;
        Ok(Revision::of(&bytes))
    }

    async fn replace_file(&self, bytes: &[u8]) -> Result<(), JsonFileError> {
        let write_failed = |e: std::io::Error| JsonFileError::WriteFailed {
            path: self.display_path(),
            reason: e.to_string(),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_failed)?;
        }

        let mut tmp_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        let mut file = tokio::fs::File::create(&tmp_path)
            .await
            .map_err(write_failed)?;
        file.write_all(bytes).await.map_err(write_failed)?;
        file.sync_all().await.map_err(write_failed)?;
        drop(file);

        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(write_failed)?;

        tracing::debug!(path = %self.display_path(), bytes = bytes.len(), "Wrote JSON document");
        Ok(())
    }
}
