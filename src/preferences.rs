//! Display Preferences
//!
//! Light/dark preference persisted to a local JSON file. The first load,
//! before anything was saved, follows the system hint.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Reads the terminal's `COLORFGBG` hint ("fg;bg"); a light background
    /// colour (7 or 15) means a light system theme.
    pub fn from_system_hint(hint: Option<&str>) -> Self {
        let background = hint
            .and_then(|h| h.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(7) | Some(15) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn system() -> Self {
        Self::from_system_hint(std::env::var("COLORFGBG").ok().as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: Theme,
}

// == Theme Preference ==
/// The current theme and where it is persisted.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    path: PathBuf,
    theme: Theme,
}

impl ThemePreference {
    /// Loads the saved theme from `path`, falling back to `system` when no
    /// readable preference exists.
    pub fn load(path: impl Into<PathBuf>, system: Theme) -> Self {
        let path = path.into();
        let theme = match read_theme(&path) {
            Ok(Some(theme)) => theme,
            Ok(None) => system,
            Err(e) => {
                warn!("Ignoring unreadable theme preference {}: {}", path.display(), e);
                system
            }
        };
        debug!("Theme preference loaded: {:?}", theme);
        Self { path, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sets and persists the theme.
    pub fn set(&mut self, theme: Theme) -> io::Result<()> {
        self.theme = theme;
        write_theme(&self.path, theme)
    }

    /// Flips between light and dark and persists the result.
    pub fn toggle(&mut self) -> io::Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }
}

fn read_theme(path: &Path) -> io::Result<Option<Theme>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let stored: StoredPreference = serde_json::from_str(&contents)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            Ok(Some(stored.theme))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

fn write_theme(path: &Path, theme: Theme) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string(&StoredPreference { theme })
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, contents)
}
