//! Plugin-Nutzer – lesende Fassade ueber den Komponenten-Speicher
//!
//! Hostseitiger Zugriff auf Komponenten per Name oder Typ, wahlweise
//! beschraenkt auf den Host, ein benanntes Plugin oder alles zusammen.
//! Mehrfach-Treffer kommen in Registrierungsreihenfolge zurueck, damit
//! Aufrufer eine verlaessliche relative Ordnung haben.

use std::any::Any;
use std::sync::Arc;

use steckwerk_core::PluginId;

use crate::error::{ErweiterungsFehler, Result};
use crate::speicher::KomponentenSpeicher;

/// Lesende Fassade fuer Host-Code
#[derive(Clone)]
pub struct PluginNutzer {
    speicher: Arc<KomponentenSpeicher>,
}

impl PluginNutzer {
    /// Erstellt eine Fassade ueber einem Komponenten-Speicher
    pub fn neu(speicher: Arc<KomponentenSpeicher>) -> Self {
        Self { speicher }
    }

    /// Sucht eine Komponente per exaktem Namen, hostweit
    ///
    /// Ein unbekannter Name ist ein meldepflichtiger Fehler, kein leeres
    /// Ergebnis.
    pub fn komponente(&self, name: &str) -> Result<Arc<dyn Any + Send + Sync>> {
        self.speicher
            .nach_name(name)
            .ok_or_else(|| ErweiterungsFehler::KomponenteNichtGefunden(name.into()))
    }

    /// Sucht eine Komponente per Name und erwartet einen konkreten Typ
    pub fn komponente_vom_typ<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        self.komponente(name)?
            .downcast::<T>()
            .map_err(|_| ErweiterungsFehler::FalscherKomponentenTyp(name.into()))
    }

    /// Alle Host-eigenen Komponenten vom Typ T
    pub fn host_komponenten<T: Any + Send + Sync>(&self) -> Vec<Arc<T>> {
        self.speicher.host_komponenten::<T>()
    }

    /// Alle Komponenten eines benannten Plugins vom Typ T
    ///
    /// Ein nie registriertes Plugin ist ein Fehler; ein registriertes
    /// Plugin ohne Treffer liefert eine leere Sequenz.
    pub fn plugin_komponenten<T: Any + Send + Sync>(&self, plugin: &PluginId) -> Result<Vec<Arc<T>>> {
        self.speicher.plugin_komponenten::<T>(plugin)
    }

    /// Alle Komponenten vom Typ T – Host und saemtliche Plugins,
    /// in Registrierungsreihenfolge
    pub fn alle_komponenten<T: Any + Send + Sync>(&self) -> Vec<Arc<T>> {
        self.speicher.alle_komponenten::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speicher::Herkunft;

    fn aufgebauter_speicher() -> (Arc<KomponentenSpeicher>, PluginId) {
        let speicher = Arc::new(KomponentenSpeicher::neu());
        let plugin = PluginId::neu("lager-plugin");
        speicher.plugin_anmelden(&plugin);
        speicher
            .einfuegen("host-dienst", Herkunft::Host, "host".to_string())
            .unwrap();
        speicher
            .einfuegen(
                "lager-plugin@dienst",
                Herkunft::Plugin(plugin.clone()),
                "plugin".to_string(),
            )
            .unwrap();
        (speicher, plugin)
    }

    #[test]
    fn komponente_per_name() {
        let (speicher, _) = aufgebauter_speicher();
        let nutzer = PluginNutzer::neu(speicher);

        let wert = nutzer.komponente_vom_typ::<String>("host-dienst").unwrap();
        assert_eq!(*wert, "host");
    }

    #[test]
    fn unbekannter_name_ist_fehler() {
        let (speicher, _) = aufgebauter_speicher();
        let nutzer = PluginNutzer::neu(speicher);

        let err = nutzer.komponente("gibt-es-nicht").unwrap_err();
        assert!(matches!(err, ErweiterungsFehler::KomponenteNichtGefunden(_)));
    }

    #[test]
    fn falscher_typ_ist_fehler() {
        let (speicher, _) = aufgebauter_speicher();
        let nutzer = PluginNutzer::neu(speicher);

        let err = nutzer.komponente_vom_typ::<u32>("host-dienst").unwrap_err();
        assert!(matches!(err, ErweiterungsFehler::FalscherKomponentenTyp(_)));
    }

    #[test]
    fn bereichs_abfragen() {
        let (speicher, plugin) = aufgebauter_speicher();
        let nutzer = PluginNutzer::neu(speicher);

        assert_eq!(nutzer.host_komponenten::<String>().len(), 1);
        assert_eq!(nutzer.plugin_komponenten::<String>(&plugin).unwrap().len(), 1);

        let alle = nutzer.alle_komponenten::<String>();
        assert_eq!(alle.len(), 2);
        // Registrierungsreihenfolge: erst Host, dann Plugin
        assert_eq!(*alle[0], "host");
        assert_eq!(*alle[1], "plugin");
    }

    #[test]
    fn nie_registriertes_plugin_ist_fehler() {
        let (speicher, _) = aufgebauter_speicher();
        let nutzer = PluginNutzer::neu(speicher);

        let err = nutzer
            .plugin_komponenten::<String>(&PluginId::neu("fremd"))
            .unwrap_err();
        assert!(matches!(err, ErweiterungsFehler::PluginNichtGefunden(_)));
    }

    #[test]
    fn registriertes_plugin_ohne_treffer_liefert_leer() {
        let (speicher, plugin) = aufgebauter_speicher();
        let nutzer = PluginNutzer::neu(speicher);

        // Kein u64 registriert, Plugin aber bekannt
        assert!(nutzer.plugin_komponenten::<u64>(&plugin).unwrap().is_empty());
    }
}
