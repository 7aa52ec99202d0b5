//! Persisted visitor preferences.
//!
//! The only preference that survives a restart is the theme flag: the
//! stored string "light", or nothing at all, which means the default dark
//! theme. It is read once at startup and rewritten on every toggle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::info;

const THEME_FILE: &str = "theme";
const LIGHT: &str = "light";

/// Site color theme. Dark is the default when nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class added to `<body>`; the dark theme is the unclassed default.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "",
            Theme::Light => "light-theme",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => LIGHT,
        }
    }
}

/// Process-wide theme store backed by a single file in the state dir.
pub struct ThemeStore {
    path: PathBuf,
    current: RwLock<Theme>,
}

impl ThemeStore {
    /// Load the stored preference. A missing or unrecognized file means
    /// the default dark theme.
    pub fn load(state_dir: &Path) -> Self {
        let path = state_dir.join(THEME_FILE);
        let current = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim() == LIGHT => Theme::Light,
            _ => Theme::Dark,
        };
        info!(theme = current.as_str(), "loaded theme preference");
        Self {
            path,
            current: RwLock::new(current),
        }
    }

    pub fn theme(&self) -> Theme {
        *self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a theme. Light writes the flag file; dark removes it, so an
    /// absent file always reads back as the default.
    pub fn set(&self, theme: Theme) -> io::Result<()> {
        match theme {
            Theme::Light => fs::write(&self.path, LIGHT)?,
            Theme::Dark => match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            },
        }
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = theme;
        Ok(())
    }

    /// Flip the theme and persist the result, returning the new value.
    pub fn toggle(&self) -> io::Result<Theme> {
        let next = self.theme().flipped();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_state_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("velocity-prefs-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_means_dark() {
        let dir = temp_state_dir();
        let store = ThemeStore::load(&dir);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_stored_light_flag() {
        let dir = temp_state_dir();
        fs::write(dir.join(THEME_FILE), "light").unwrap();
        let store = ThemeStore::load(&dir);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_contents_mean_dark() {
        let dir = temp_state_dir();
        fs::write(dir.join(THEME_FILE), "solarized").unwrap();
        let store = ThemeStore::load(&dir);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_across_load() {
        let dir = temp_state_dir();
        let store = ThemeStore::load(&dir);
        assert_eq!(store.toggle().unwrap(), Theme::Light);

        let reloaded = ThemeStore::load(&dir);
        assert_eq!(reloaded.theme(), Theme::Light);

        // Toggling back to dark removes the file entirely
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert!(!dir.join(THEME_FILE).exists());
        assert_eq!(ThemeStore::load(&dir).theme(), Theme::Dark);
    }
}
