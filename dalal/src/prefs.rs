//! Local key-value preferences and the persisted theme.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use dalal_core::{DalalError, Theme};

/// Key the theme is stored under.
pub const THEME_KEY: &str = "theme";

/// String-to-string preference storage.
pub trait PreferenceStore: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    /// Backend failures (unreadable or corrupt file).
    fn get(&self, key: &str) -> Result<Option<String>, DalalError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    /// Backend failures (unwritable file).
    fn set(&self, key: &str, value: &str) -> Result<(), DalalError>;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, DalalError> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DalalError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk. A missing file reads as empty.
#[derive(Debug)]
pub struct JsonFilePreferences {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFilePreferences {
    /// Store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, DalalError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                DalalError::Data(format!("corrupt preferences {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(DalalError::Data(format!(
                "cannot read preferences {}: {e}",
                self.path.display()
            ))),
        }
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, DalalError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DalalError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&all)
            .map_err(|e| DalalError::Data(format!("cannot encode preferences: {e}")))?;
        std::fs::write(&self.path, text).map_err(|e| {
            DalalError::Data(format!(
                "cannot write preferences {}: {e}",
                self.path.display()
            ))
        })
    }
}

/// Theme persisted under [`THEME_KEY`].
#[derive(Clone)]
pub struct ThemePreference {
    store: Arc<dyn PreferenceStore>,
}

impl ThemePreference {
    /// Wrap a store.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Saved theme, or light when nothing usable is stored.
    #[must_use]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn load(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(v)) => v.parse().unwrap_or_else(|e| {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "preference store unavailable; using default theme");
                Theme::default()
            }
        }
    }

    /// Flip `current`, persist the result and return it.
    ///
    /// # Errors
    /// Propagates store write failures.
    pub fn toggle(&self, current: Theme) -> Result<Theme, DalalError> {
        let next = current.toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        Ok(next)
    }
}
