use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::theme::ThemeMode;

/// Preferencias persistidas de la aplicación, cargadas desde un archivo JSON
/// en el directorio de configuración del usuario.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Modo de tema elegido por el usuario. `None` significa que todavía no
    /// eligió y se resuelve contra la preferencia del sistema operativo.
    #[serde(rename = "theme-mode", default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Self {
        if let Ok(text) = fs::read_to_string(path) {
            if let Ok(cfg) = serde_json::from_str(&text) {
                return cfg;
            }
            log::warn!(
                "configuración ilegible en {}, se usan valores por defecto",
                path.display()
            );
        }
        Self::default()
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("logicrm").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&dir.path().join("no-existe.json"));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ esto no es json").unwrap();
        assert_eq!(AppConfig::load(&path), AppConfig::default());
    }

    #[test]
    fn round_trip_preserves_theme_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anidado").join("config.json");

        let cfg = AppConfig {
            theme_mode: Some(ThemeMode::Dark),
        };
        cfg.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path), cfg);
    }

    #[test]
    fn persisted_value_uses_the_literal_key_and_mode_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        AppConfig {
            theme_mode: Some(ThemeMode::Dark),
        }
        .save(&path)
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"theme-mode\""));
        assert!(text.contains("\"dark\""));
    }
}
