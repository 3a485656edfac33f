//! steckwerk-core – Gemeinsame Typen fuer das Steckwerk-Plugin-System
//!
//! Dieses Crate stellt die fundamentalen Bausteine bereit, die von allen
//! anderen Steckwerk-Crates gemeinsam genutzt werden: Plugin-Identitaeten,
//! Lebenszyklus-Zustaende und die Typ-Beschreibungen, die der externe
//! Scanner pro Plugin liefert.

pub mod klassen;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use klassen::TypBeschreibung;
pub use types::{InstanzId, PluginId, PluginMeta, PluginZustand};
