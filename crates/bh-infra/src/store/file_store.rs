use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use bh_core::ports::{FlagKey, FlagStorePort, SessionStorePort};
use bh_core::Session;

/// Default location of the state file, e.g.
/// `~/.local/share/cn.bohe.app/state.json` on Linux.
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cn.bohe.app")
        .join("state.json")
}

/// On-disk shape. Flags stay a plain string map (each logical flag owns its
/// key); the session is one nested record so login state can never tear
/// across independent keys.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    flags: BTreeMap<String, String>,
    #[serde(default)]
    session: Option<Session>,
}

/// File-backed flag and session store.
///
/// Every mutation is a read-modify-write of the whole file under one lock,
/// persisted with a tmp-file + rename so the file is always either the old
/// or the new contents.
pub struct FileStateStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn load_file(&self) -> Result<StateFile> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StateFile::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read state failed: {}", self.path.display()))
            }
        };
        serde_json::from_str(&content)
            .with_context(|| format!("parse state failed: {}", self.path.display()))
    }

    async fn save_file(&self, state: &StateFile) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create state dir failed: {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(state).context("serialize state failed")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp state failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp state to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }

    async fn update<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut StateFile),
    {
        let _guard = self.lock.lock().await;
        let mut state = self.load_file().await?;
        mutate(&mut state);
        self.save_file(&state).await
    }
}

#[async_trait]
impl FlagStorePort for FileStateStore {
    async fn get(&self, key: FlagKey) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        let state = self.load_file().await?;
        Ok(state.flags.get(key.as_str()).cloned())
    }

    async fn set(&self, key: FlagKey, value: &str) -> Result<()> {
        self.update(|state| {
            state.flags.insert(key.as_str().to_string(), value.to_string());
        })
        .await
    }

    async fn remove(&self, key: FlagKey) -> Result<()> {
        self.update(|state| {
            state.flags.remove(key.as_str());
        })
        .await
    }
}

#[async_trait]
impl SessionStorePort for FileStateStore {
    async fn load(&self) -> Result<Option<Session>> {
        let _guard = self.lock.lock().await;
        let state = self.load_file().await?;
        Ok(state.session)
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let session = session.clone();
        self.update(move |state| {
            state.session = Some(session);
        })
        .await
    }

    async fn clear(&self) -> Result<()> {
        self.update(|state| {
            state.session = None;
        })
        .await
    }
}
