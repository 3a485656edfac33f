//! steckwerk-alias – Alias-Erweiterung fuer die Steckwerk-Pipeline
//!
//! Das Arbeitsbeispiel einer Erweiterung: Plugins bringen Entitaets-Typen
//! mit, die Erweiterung traegt fuer jeden einen Alias in eine gemeinsame
//! prozessweite Tabelle ein und entfernt beim Entladen exakt die eigenen
//! Eintraege wieder.
//!
//! - [`registry::AliasRegistry`] – die gemeinsame Host-Ressource
//! - [`gruppe::EntitaetsGruppe`] – klassifiziert Entitaets-Typen
//! - [`verarbeiter::AliasVerarbeiter`] – traegt Aliase ein und aus
//! - [`provider::AliasErweiterung`] – buendelt alles fuer die Aggregation

pub mod gruppe;
pub mod provider;
pub mod registry;
pub mod verarbeiter;

// Bequeme Re-Exporte
pub use gruppe::EntitaetsGruppe;
pub use provider::AliasErweiterung;
pub use registry::{AliasRegistry, RESSOURCEN_NAME};
pub use verarbeiter::AliasVerarbeiter;
