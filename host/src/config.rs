//! Host-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass der Host ohne Konfigurationsdatei
//! lauffaehig ist.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Vollstaendige Host-Konfiguration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HostConfig {
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
    /// Namensraum-Einstellungen fuer Plugin-Komponenten
    pub namensraum: NamensraumEinstellungen,
    /// Einstellungen der Alias-Erweiterung
    pub aliase: AliasEinstellungen,
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Namensraum-Einstellungen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamensraumEinstellungen {
    /// Suffix fuer Plugin-qualifizierte Komponenten-Namen (leer = keines)
    pub suffix: String,
}

/// Einstellungen der Alias-Erweiterung
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasEinstellungen {
    /// Explizite Zuordnung Typname -> Alias, uebersteuert Attribut und
    /// Standard-Ableitung
    pub zuordnung: HashMap<String, String>,
}

impl HostConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        let config = match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt)
                    .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}"))?;
                config
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Self::default()
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
                ))
            }
        };

        if !steckwerk_observability::logging::log_level_gueltig(&config.logging.level) {
            anyhow::bail!("Ungueltiger Log-Level: {}", config.logging.level);
        }
        if !steckwerk_observability::logging::log_format_gueltig(&config.logging.format) {
            anyhow::bail!("Ungueltiges Log-Format: {}", config.logging.format);
        }
        Ok(config)
    }
}
