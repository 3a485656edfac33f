//! Registrierungs-Kontext – veraenderlicher Zustandsbeutel pro Plugin-Instanz
//!
//! Wird beim Entdecken eines Plugins angelegt und erst nach vollstaendiger
//! Deregistrierung verworfen. Stufen-Komponenten erhalten den Kontext nur
//! fuer die Dauer eines einzelnen Aufrufs und duerfen ihn nicht behalten;
//! Eigentuemer ist ausschliesslich der Lebenszyklus-Controller.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use steckwerk_core::{PluginId, PluginMeta, TypBeschreibung};

use crate::stufe::KlassenGruppe;

/// Zustandsbeutel einer Plugin-Instanz
pub struct RegistrierungsKontext {
    meta: PluginMeta,
    /// Erweiterungszustand: was die Stufen eingetragen haben
    erweiterungen: HashMap<String, Box<dyn Any + Send + Sync>>,
    /// Klassifizierte Typen: Gruppen-ID -> Treffer in Deklarationsreihenfolge
    gruppen: HashMap<String, Vec<TypBeschreibung>>,
}

impl RegistrierungsKontext {
    /// Erstellt einen leeren Kontext fuer eine Plugin-Instanz
    pub fn neu(meta: PluginMeta) -> Self {
        Self {
            meta,
            erweiterungen: HashMap::new(),
            gruppen: HashMap::new(),
        }
    }

    /// Gibt die Metadaten des zugehoerigen Plugins zurueck
    pub fn meta(&self) -> &PluginMeta {
        &self.meta
    }

    /// Gibt die Plugin-ID zurueck
    pub fn plugin_id(&self) -> &PluginId {
        &self.meta.id
    }

    /// Legt einen typisierten Wert im Erweiterungszustand ab
    ///
    /// Ein bereits vorhandener Wert unter demselben Schluessel wird ersetzt.
    pub fn erweiterung_setzen<T: Any + Send + Sync>(
        &mut self,
        schluessel: impl Into<String>,
        wert: T,
    ) {
        self.erweiterungen.insert(schluessel.into(), Box::new(wert));
    }

    /// Liest einen typisierten Wert aus dem Erweiterungszustand
    pub fn erweiterung<T: Any + Send + Sync>(&self, schluessel: &str) -> Option<&T> {
        self.erweiterungen
            .get(schluessel)
            .and_then(|wert| wert.downcast_ref::<T>())
    }

    /// Liest einen typisierten Wert veraenderbar
    pub fn erweiterung_mut<T: Any + Send + Sync>(&mut self, schluessel: &str) -> Option<&mut T> {
        self.erweiterungen
            .get_mut(schluessel)
            .and_then(|wert| wert.downcast_mut::<T>())
    }

    /// Entnimmt einen typisierten Wert aus dem Erweiterungszustand
    ///
    /// Bei Typ-Diskrepanz bleibt der Wert unveraendert liegen und es wird
    /// `None` zurueckgegeben.
    pub fn erweiterung_entnehmen<T: Any + Send + Sync>(&mut self, schluessel: &str) -> Option<T> {
        let wert = self.erweiterungen.remove(schluessel)?;
        match wert.downcast::<T>() {
            Ok(getroffen) => Some(*getroffen),
            Err(urspruenglich) => {
                self.erweiterungen.insert(schluessel.into(), urspruenglich);
                None
            }
        }
    }

    /// Ordnet die Typen eines Plugins den Klassen-Gruppen zu
    ///
    /// Laeuft genau einmal, bevor die Pipeline registriert – Stufen lesen
    /// anschliessend nur noch. Die Reihenfolge der Gruppen untereinander
    /// ist bewusst unbestimmt; innerhalb einer Gruppe bleiben die Typen in
    /// Deklarationsreihenfolge.
    pub fn klassifizieren(
        &mut self,
        typen: &[TypBeschreibung],
        gruppen: &[Arc<dyn KlassenGruppe>],
    ) {
        for gruppe in gruppen {
            let treffer: Vec<TypBeschreibung> = typen
                .iter()
                .filter(|typ| gruppe.filtern(typ))
                .cloned()
                .collect();
            self.gruppen
                .entry(gruppe.gruppen_id().to_string())
                .or_default()
                .extend(treffer);
        }
    }

    /// Gibt die klassifizierten Typen einer Gruppe zurueck
    ///
    /// Eine unbekannte Gruppen-ID liefert eine leere Sequenz.
    pub fn gruppen_typen(&self, gruppen_id: &str) -> &[TypBeschreibung] {
        self.gruppen
            .get(gruppen_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
