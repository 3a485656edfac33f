//! Grundlegende Typen fuer das Steckwerk-Plugin-System
//!
//! Alle IDs verwenden das Newtype-Pattern um Verwechslungen zwischen
//! verschiedenen ID-Arten zur Compilezeit auszuschliessen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Eindeutiger Plugin-Schluessel
///
/// Wird vom externen Plugin-Manager vergeben und bleibt ueber alle
/// Ladezyklen eines Plugins hinweg gleich. Dient als Namensraum-Praefix
/// fuer Plugin-eigene Komponenten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginId(String);

impl PluginId {
    /// Erstellt eine PluginId aus einem Schluessel
    pub fn neu(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt den Schluessel als &str zurueck
    pub fn als_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PluginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Eindeutige Instanz-ID – pro Ladevorgang neu vergeben
///
/// Wird ein Plugin entladen und erneut geladen, erhaelt die neue Instanz
/// eine frische InstanzId, waehrend die [`PluginId`] gleich bleibt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanzId(pub Uuid);

impl InstanzId {
    /// Erstellt eine neue zufaellige InstanzId
    pub fn neu() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for InstanzId {
    fn default() -> Self {
        Self::neu()
    }
}

impl std::fmt::Display for InstanzId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "instanz:{}", self.0)
    }
}

/// Zustand einer Plugin-Instanz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginZustand {
    /// Instanz ist angelegt aber noch nicht gestartet
    Erstellt,
    /// Plugin laeuft
    Gestartet,
    /// Plugin ist angehalten (erneutes Starten moeglich)
    Gestoppt,
    /// Plugin ist entfernt – Endzustand
    Geloescht,
}

impl std::fmt::Display for PluginZustand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginZustand::Erstellt => write!(f, "Erstellt"),
            PluginZustand::Gestartet => write!(f, "Gestartet"),
            PluginZustand::Gestoppt => write!(f, "Gestoppt"),
            PluginZustand::Geloescht => write!(f, "Geloescht"),
        }
    }
}

/// Metadaten einer geladenen Plugin-Instanz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMeta {
    pub id: PluginId,
    pub instanz_id: InstanzId,
    pub name: String,
    pub version: String,
    pub beschreibung: String,
    pub geladen_am: DateTime<Utc>,
}

impl PluginMeta {
    /// Erstellt Metadaten fuer einen frischen Ladevorgang
    pub fn neu(id: PluginId, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id,
            instanz_id: InstanzId::neu(),
            name: name.into(),
            version: version.into(),
            beschreibung: String::new(),
            geladen_am: Utc::now(),
        }
    }

    /// Setzt die Beschreibung
    pub fn mit_beschreibung(mut self, beschreibung: impl Into<String>) -> Self {
        self.beschreibung = beschreibung.into();
        self
    }
}
