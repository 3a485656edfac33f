//! Fehlertypen fuer die Erweiterungs-Pipeline

use steckwerk_core::{PluginId, PluginZustand};
use thiserror::Error;

/// Alle moeglichen Fehler in der Erweiterungs-Pipeline
#[derive(Debug, Error)]
pub enum ErweiterungsFehler {
    // --- Aggregation ---
    #[error("Pipeline-Registry wurde bereits initialisiert")]
    BereitsInitialisiert,

    #[error("Benoetigte Host-Ressource fehlt: {0}")]
    FehlendeRessource(String),

    // --- Lebenszyklus ---
    #[error("Ungueltiger Zustandsuebergang: {von} -> {nach}")]
    UngueltigerUebergang {
        von: PluginZustand,
        nach: PluginZustand,
    },

    #[error("Plugin bereits registriert: {0}")]
    BereitsRegistriert(PluginId),

    #[error("Plugin ist geloescht: {0}")]
    PluginGeloescht(PluginId),

    // --- Komponenten-Speicher / Lookup ---
    #[error("Komponente nicht gefunden: {0}")]
    KomponenteNichtGefunden(String),

    #[error("Komponente bereits vorhanden: {0}")]
    KomponenteVorhanden(String),

    #[error("Komponente '{0}' hat nicht den erwarteten Typ")]
    FalscherKomponentenTyp(String),

    #[error("Plugin nicht gefunden: {0}")]
    PluginNichtGefunden(PluginId),

    // --- Stufen ---
    #[error("Stufenfehler ({stufe}): {grund}")]
    Stufe { stufe: String, grund: String },

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl ErweiterungsFehler {
    /// Erstellt einen Stufenfehler aus Schluessel und Grund
    pub fn stufe(stufe: impl Into<String>, grund: impl Into<String>) -> Self {
        Self::Stufe {
            stufe: stufe.into(),
            grund: grund.into(),
        }
    }
}

/// Result-Alias fuer die Erweiterungs-Pipeline
pub type Result<T> = std::result::Result<T, ErweiterungsFehler>;
