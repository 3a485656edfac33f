//! Alias-Erweiterung – Provider der Alias-Stufen

use std::collections::HashMap;
use std::sync::Arc;

use steckwerk_pipeline::{
    ErweiterungsProvider, HostKontext, KlassenGruppe, PipeVerarbeiter, Result,
};
use tracing::warn;

use crate::gruppe::EntitaetsGruppe;
use crate::registry::{AliasRegistry, RESSOURCEN_NAME};
use crate::verarbeiter::AliasVerarbeiter;

/// Provider der die Entitaets-Gruppe und den Alias-Verarbeiter buendelt
pub struct AliasErweiterung {
    explizite_aliase: HashMap<String, String>,
}

impl AliasErweiterung {
    /// Eindeutiger Provider-Schluessel
    pub const SCHLUESSEL: &'static str = "alias";

    /// Erstellt die Erweiterung ohne explizite Alias-Zuordnung
    pub fn neu() -> Self {
        Self {
            explizite_aliase: HashMap::new(),
        }
    }

    /// Erstellt die Erweiterung mit einer expliziten Zuordnung
    /// Typname -> Alias, die Attribut und Standard-Ableitung uebersteuert
    pub fn mit_aliasen(explizite_aliase: HashMap<String, String>) -> Self {
        Self { explizite_aliase }
    }
}

impl Default for AliasErweiterung {
    fn default() -> Self {
        Self::neu()
    }
}

impl ErweiterungsProvider for AliasErweiterung {
    fn schluessel(&self) -> &str {
        Self::SCHLUESSEL
    }

    fn pipe_verarbeiter(&self, host: &HostKontext) -> Result<Vec<Arc<dyn PipeVerarbeiter>>> {
        let registry = host.ressource::<AliasRegistry>(RESSOURCEN_NAME);
        if registry.is_none() {
            warn!(
                ressource = RESSOURCEN_NAME,
                "Alias-Registry nicht im Host-Kontext, Verarbeiter laeuft im Leerlauf"
            );
        }
        Ok(vec![Arc::new(AliasVerarbeiter::neu(
            registry,
            self.explizite_aliase.clone(),
        ))])
    }

    fn klassen_gruppen(&self, _host: &HostKontext) -> Result<Vec<Arc<dyn KlassenGruppe>>> {
        Ok(vec![Arc::new(EntitaetsGruppe)])
    }
}
