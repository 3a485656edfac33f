//! Erweiterungs-Provider – buendelt Stufen-Komponenten unter einem Schluessel
//!
//! Ein Provider steuert null oder mehr Komponenten jeder der vier
//! Kategorien bei. `initialisieren` laeuft hoechstens einmal pro Prozess;
//! das stellt die einmalige Aggregation der [`crate::registry::PipelineRegistry`]
//! sicher. Die Accessoren duerfen den [`HostKontext`] konsultieren –
//! fehlt dort eine benoetigte Ressource, melden sie
//! [`ErweiterungsFehler::FehlendeRessource`] und die Aggregation
//! ueberspringt nur diese Kategorie.

use std::sync::Arc;

use crate::error::Result;
use crate::speicher::HostKontext;
use crate::stufe::{KlassenGruppe, NachVerarbeiter, PipeVerarbeiter, RessourcenLader};

/// Vertrag eines Erweiterungs-Providers
pub trait ErweiterungsProvider: Send + Sync {
    /// Eindeutiger Schluessel des Providers
    fn schluessel(&self) -> &str;

    /// Einmalige Initialisierung vor dem Einsammeln der Komponenten
    fn initialisieren(&self, _host: &HostKontext) -> Result<()> {
        Ok(())
    }

    /// Ressourcen-Lader dieses Providers
    fn ressourcen_lader(&self, _host: &HostKontext) -> Result<Vec<Arc<dyn RessourcenLader>>> {
        Ok(Vec::new())
    }

    /// Pipe-Verarbeiter dieses Providers
    fn pipe_verarbeiter(&self, _host: &HostKontext) -> Result<Vec<Arc<dyn PipeVerarbeiter>>> {
        Ok(Vec::new())
    }

    /// Klassen-Gruppen dieses Providers
    fn klassen_gruppen(&self, _host: &HostKontext) -> Result<Vec<Arc<dyn KlassenGruppe>>> {
        Ok(Vec::new())
    }

    /// Nach-Verarbeiter dieses Providers
    fn nach_verarbeiter(&self, _host: &HostKontext) -> Result<Vec<Arc<dyn NachVerarbeiter>>> {
        Ok(Vec::new())
    }
}
