//! steckwerk-pipeline – Erweiterungs-Registrierungs-Pipeline
//!
//! Dieses Crate implementiert den Kern von Steckwerk: unabhaengig
//! paketierte Plugins registrieren Faehigkeiten in gemeinsamen
//! Host-Ressourcen und nehmen beim Entladen exakt diese Aenderungen
//! zurueck – ohne dass Pipeline und Plugin die Interna des jeweils
//! anderen zur Compilezeit kennen.
//!
//! # Architektur
//! - [`provider::ErweiterungsProvider`] – buendelt Stufen-Komponenten unter einem Schluessel
//! - [`registry::PipelineRegistry`] – einmalige Aggregation, danach unveraenderlich
//! - [`stufe`] – die vier Stufen-Kategorien der Pipeline
//! - [`kontext::RegistrierungsKontext`] – Zustandsbeutel pro Plugin-Instanz
//! - [`lebenszyklus::PluginController`] – Zustandsmaschine mit garantiertem Aufraeumen
//! - [`namensraum::NamensGenerator`] – kollisionsfreie Komponenten-Namen
//! - [`speicher::KomponentenSpeicher`] – Bean-Ablage an der Host-Grenze
//! - [`nutzer::PluginNutzer`] – lesende Lookup-Fassade fuer Host-Code

pub mod error;
pub mod kontext;
pub mod lebenszyklus;
pub mod namensraum;
pub mod nutzer;
pub mod prioritaet;
pub mod provider;
pub mod registry;
pub mod speicher;
pub mod stufe;

// Bequeme Re-Exporte
pub use error::{ErweiterungsFehler, Result};
pub use kontext::RegistrierungsKontext;
pub use lebenszyklus::{LeererHaken, PluginController, PluginHaken};
pub use namensraum::{standard_name, NamensGenerator};
pub use nutzer::PluginNutzer;
pub use prioritaet::OrdnungsPrioritaet;
pub use provider::ErweiterungsProvider;
pub use registry::PipelineRegistry;
pub use speicher::{Herkunft, HostKontext, KomponentenSpeicher};
pub use stufe::{KlassenGruppe, NachVerarbeiter, PipeVerarbeiter, RessourcenLader};
