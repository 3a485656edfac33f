//! Alias-Verarbeiter – das Arbeitsbeispiel eines Pipe-Verarbeiters
//!
//! Registriert fuer jeden Entitaets-Typ eines Plugins einen Alias in der
//! gemeinsamen [`AliasRegistry`] und vermerkt jeden eingetragenen Alias
//! im Registrierungs-Kontext. Die Deregistrierung entfernt exakt diese
//! Aliase – nie mehr, nie weniger. Genau das macht viele Plugins an einer
//! einzigen gemeinsamen Tabelle sicher: jedes Plugin entfernt nur, was es
//! selbst eingetragen hat.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use steckwerk_core::TypBeschreibung;
use steckwerk_pipeline::{
    standard_name, OrdnungsPrioritaet, PipeVerarbeiter, RegistrierungsKontext, Result,
};
use tracing::{debug, warn};

use crate::gruppe::EntitaetsGruppe;
use crate::registry::AliasRegistry;

/// Attribut das einen Alias pro Typ ueberschreibt
pub const ALIAS_ATTRIBUT: &str = "alias";

/// Schluessel unter dem die eingetragenen Aliase im Kontext liegen
pub const ALIAS_NAMEN_SCHLUESSEL: &str = "alias-namen";

/// Pipe-Verarbeiter fuer Typ-Aliase
pub struct AliasVerarbeiter {
    /// Fehlt die Registry beim Host, degradiert der Verarbeiter zum
    /// dokumentierten Leerlauf mit Warnung
    registry: Option<Arc<AliasRegistry>>,
    /// Explizite Zuordnung Typname -> Alias; gewinnt vor Attribut und
    /// Standard-Ableitung
    explizite_aliase: HashMap<String, String>,
}

impl AliasVerarbeiter {
    /// Eindeutiger Schluessel dieser Stufe
    pub const SCHLUESSEL: &'static str = "alias-verarbeiter";

    /// Erstellt den Verarbeiter
    pub fn neu(
        registry: Option<Arc<AliasRegistry>>,
        explizite_aliase: HashMap<String, String>,
    ) -> Self {
        Self {
            registry,
            explizite_aliase,
        }
    }

    /// Leitet den Alias eines Typs ab
    ///
    /// Vorrang: explizite Zuordnung > Alias-Attribut am Typ > Standard-Name.
    fn alias_fuer(&self, typ: &TypBeschreibung) -> String {
        self.explizite_aliase
            .get(typ.name())
            .cloned()
            .or_else(|| typ.attribut(ALIAS_ATTRIBUT).map(str::to_owned))
            .unwrap_or_else(|| standard_name(typ.name()))
    }
}

impl PipeVerarbeiter for AliasVerarbeiter {
    fn schluessel(&self) -> &str {
        Self::SCHLUESSEL
    }

    fn prioritaet(&self) -> OrdnungsPrioritaet {
        OrdnungsPrioritaet::mittel()
    }

    fn registrieren(&self, kontext: &mut RegistrierungsKontext) -> Result<()> {
        let Some(registry) = &self.registry else {
            warn!(
                plugin = %kontext.plugin_id(),
                "Alias-Registry nicht verfuegbar, Alias-Registrierung entfaellt"
            );
            return Ok(());
        };

        let mut namen: HashSet<String> = kontext
            .erweiterung_entnehmen(ALIAS_NAMEN_SCHLUESSEL)
            .unwrap_or_default();

        let typen = kontext.gruppen_typen(EntitaetsGruppe::GRUPPEN_ID).to_vec();
        for typ in &typen {
            let alias = self.alias_fuer(typ);
            if alias.is_empty() {
                continue;
            }
            registry.eintragen(alias.clone(), typ.name());
            namen.insert(alias);
        }

        debug!(
            plugin = %kontext.plugin_id(),
            aliase = namen.len(),
            "Typ-Aliase eingetragen"
        );
        kontext.erweiterung_setzen(ALIAS_NAMEN_SCHLUESSEL, namen);
        Ok(())
    }

    fn deregistrieren(&self, kontext: &mut RegistrierungsKontext) -> Result<()> {
        let Some(registry) = &self.registry else {
            warn!(
                plugin = %kontext.plugin_id(),
                "Alias-Registry nicht verfuegbar, Alias-Deregistrierung entfaellt"
            );
            return Ok(());
        };

        if let Some(namen) =
            kontext.erweiterung_entnehmen::<HashSet<String>>(ALIAS_NAMEN_SCHLUESSEL)
        {
            for alias in &namen {
                registry.entfernen(alias);
            }
            debug!(
                plugin = %kontext.plugin_id(),
                aliase = namen.len(),
                "Typ-Aliase entfernt"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steckwerk_core::{PluginId, PluginMeta};
    use steckwerk_pipeline::KlassenGruppe;

    fn kontext_mit_typen(typen: Vec<TypBeschreibung>) -> RegistrierungsKontext {
        let meta = PluginMeta::neu(PluginId::neu("test"), "Test", "1.0.0");
        let mut kontext = RegistrierungsKontext::neu(meta);
        let gruppen: Vec<Arc<dyn KlassenGruppe>> = vec![Arc::new(EntitaetsGruppe)];
        kontext.klassifizieren(&typen, &gruppen);
        kontext
    }

    #[test]
    fn standard_ableitung() {
        let registry = Arc::new(AliasRegistry::neu());
        let verarbeiter = AliasVerarbeiter::neu(Some(Arc::clone(&registry)), HashMap::new());
        let mut kontext = kontext_mit_typen(vec![
            TypBeschreibung::neu("LagerPosten").mit_tag("entitaet")
        ]);

        verarbeiter.registrieren(&mut kontext).unwrap();

        assert_eq!(
            registry.aufloesen("lagerPosten").as_deref(),
            Some("LagerPosten")
        );
    }

    #[test]
    fn attribut_ueberschreibt_standard() {
        let registry = Arc::new(AliasRegistry::neu());
        let verarbeiter = AliasVerarbeiter::neu(Some(Arc::clone(&registry)), HashMap::new());
        let mut kontext = kontext_mit_typen(vec![TypBeschreibung::neu("LagerPosten")
            .mit_tag("entitaet")
            .mit_attribut(ALIAS_ATTRIBUT, "posten")]);

        verarbeiter.registrieren(&mut kontext).unwrap();

        assert!(registry.enthaelt("posten"));
        assert!(!registry.enthaelt("lagerPosten"));
    }

    #[test]
    fn explizite_zuordnung_gewinnt() {
        let registry = Arc::new(AliasRegistry::neu());
        let mut explizit = HashMap::new();
        explizit.insert("LagerPosten".to_string(), "bestand".to_string());
        let verarbeiter = AliasVerarbeiter::neu(Some(Arc::clone(&registry)), explizit);
        let mut kontext = kontext_mit_typen(vec![TypBeschreibung::neu("LagerPosten")
            .mit_tag("entitaet")
            .mit_attribut(ALIAS_ATTRIBUT, "posten")]);

        verarbeiter.registrieren(&mut kontext).unwrap();

        assert!(registry.enthaelt("bestand"));
        assert!(!registry.enthaelt("posten"));
        assert!(!registry.enthaelt("lagerPosten"));
    }

    #[test]
    fn deregistrieren_entfernt_exakt_das_eingetragene() {
        let registry = Arc::new(AliasRegistry::neu());
        // Ein fremder Eintrag, der unangetastet bleiben muss
        registry.eintragen("fremd", "FremdTyp");

        let verarbeiter = AliasVerarbeiter::neu(Some(Arc::clone(&registry)), HashMap::new());
        let mut kontext = kontext_mit_typen(vec![
            TypBeschreibung::neu("LagerPosten").mit_tag("entitaet"),
            TypBeschreibung::neu("VersandAuftrag").mit_tag("entitaet"),
        ]);

        verarbeiter.registrieren(&mut kontext).unwrap();
        assert_eq!(registry.anzahl(), 3);

        verarbeiter.deregistrieren(&mut kontext).unwrap();
        assert_eq!(registry.anzahl(), 1);
        assert!(registry.enthaelt("fremd"));
    }

    #[test]
    fn ohne_registry_leerlauf() {
        let verarbeiter = AliasVerarbeiter::neu(None, HashMap::new());
        let mut kontext = kontext_mit_typen(vec![
            TypBeschreibung::neu("LagerPosten").mit_tag("entitaet")
        ]);

        // Beide Pfade sind dokumentierte Leerlaeufe
        verarbeiter.registrieren(&mut kontext).unwrap();
        verarbeiter.deregistrieren(&mut kontext).unwrap();
    }

    #[test]
    fn typen_ohne_entitaets_tag_bekommen_keinen_alias() {
        let registry = Arc::new(AliasRegistry::neu());
        let verarbeiter = AliasVerarbeiter::neu(Some(Arc::clone(&registry)), HashMap::new());
        let mut kontext = kontext_mit_typen(vec![
            TypBeschreibung::neu("Hilfsklasse")
        ]);

        verarbeiter.registrieren(&mut kontext).unwrap();
        assert!(registry.ist_leer());
    }
}
