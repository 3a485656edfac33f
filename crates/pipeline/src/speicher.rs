//! Komponenten-Speicher – die Bean-Ablage des Hosts
//!
//! An dieser Grenze trifft die Pipeline auf den Host-Container: Host und
//! Plugins legen Komponenten unter eindeutigen Namen ab, die Pipeline und
//! die Lookup-Fassade lesen sie wieder heraus. Die Eintragsreihenfolge
//! bleibt erhalten, damit Mehrfach-Treffer deterministisch zurueckkommen.

use std::any::Any;
use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use steckwerk_core::PluginId;

use crate::error::{ErweiterungsFehler, Result};

/// Herkunft einer Komponente
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Herkunft {
    /// Vom Host selbst registriert
    Host,
    /// Von einem Plugin registriert
    Plugin(PluginId),
}

struct Eintrag {
    name: String,
    herkunft: Herkunft,
    wert: Arc<dyn Any + Send + Sync>,
}

#[derive(Default)]
struct SpeicherInnen {
    /// Eintraege in Registrierungsreihenfolge
    eintraege: Vec<Eintrag>,
    /// Angemeldete Plugins – auch solche ohne eigene Komponenten
    plugins: HashSet<PluginId>,
}

/// Bean-Ablage des Hosts, thread-sicher
pub struct KomponentenSpeicher {
    innen: RwLock<SpeicherInnen>,
}

impl KomponentenSpeicher {
    /// Erstellt einen leeren Speicher
    pub fn neu() -> Self {
        Self {
            innen: RwLock::new(SpeicherInnen::default()),
        }
    }

    /// Registriert eine Komponente unter einem eindeutigen Namen
    pub fn einfuegen<T: Any + Send + Sync>(
        &self,
        name: impl Into<String>,
        herkunft: Herkunft,
        wert: T,
    ) -> Result<()> {
        self.einfuegen_geteilt(name, herkunft, Arc::new(wert))
    }

    /// Registriert eine bereits geteilte Komponente
    ///
    /// Der Host behaelt so selbst ein typisiertes Handle auf die Ressource.
    pub fn einfuegen_geteilt<T: Any + Send + Sync>(
        &self,
        name: impl Into<String>,
        herkunft: Herkunft,
        wert: Arc<T>,
    ) -> Result<()> {
        let name = name.into();
        let mut innen = self.innen.write();
        if innen.eintraege.iter().any(|e| e.name == name) {
            return Err(ErweiterungsFehler::KomponenteVorhanden(name));
        }
        innen.eintraege.push(Eintrag {
            name,
            herkunft,
            wert,
        });
        Ok(())
    }

    /// Entfernt eine Komponente per Name
    pub fn entfernen(&self, name: &str) -> Result<()> {
        let mut innen = self.innen.write();
        let vorher = innen.eintraege.len();
        innen.eintraege.retain(|e| e.name != name);
        if innen.eintraege.len() == vorher {
            return Err(ErweiterungsFehler::KomponenteNichtGefunden(name.into()));
        }
        Ok(())
    }

    /// Meldet ein Plugin an – noetig damit Abfragen gegen ein Plugin ohne
    /// eigene Komponenten von unbekannten Plugins unterscheidbar bleiben
    pub fn plugin_anmelden(&self, id: &PluginId) {
        self.innen.write().plugins.insert(id.clone());
    }

    /// Meldet ein Plugin ab
    pub fn plugin_abmelden(&self, id: &PluginId) {
        self.innen.write().plugins.remove(id);
    }

    /// Prueft ob ein Plugin angemeldet ist
    pub fn ist_plugin_bekannt(&self, id: &PluginId) -> bool {
        self.innen.read().plugins.contains(id)
    }

    /// Sucht eine Komponente per Name (hostweit)
    pub fn nach_name(&self, name: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        self.innen
            .read()
            .eintraege
            .iter()
            .find(|e| e.name == name)
            .map(|e| Arc::clone(&e.wert))
    }

    /// Alle Host-Komponenten vom Typ T, in Registrierungsreihenfolge
    pub fn host_komponenten<T: Any + Send + Sync>(&self) -> Vec<Arc<T>> {
        self.gefiltert(|herkunft| matches!(herkunft, Herkunft::Host))
    }

    /// Alle Komponenten eines bestimmten Plugins vom Typ T
    ///
    /// Ein unbekanntes Plugin ist ein Fehler; ein bekanntes Plugin ohne
    /// Treffer liefert eine leere Sequenz.
    pub fn plugin_komponenten<T: Any + Send + Sync>(&self, id: &PluginId) -> Result<Vec<Arc<T>>> {
        if !self.ist_plugin_bekannt(id) {
            return Err(ErweiterungsFehler::PluginNichtGefunden(id.clone()));
        }
        Ok(self.gefiltert(|herkunft| matches!(herkunft, Herkunft::Plugin(p) if p == id)))
    }

    /// Alle Komponenten vom Typ T – Host und saemtliche Plugins
    pub fn alle_komponenten<T: Any + Send + Sync>(&self) -> Vec<Arc<T>> {
        self.gefiltert(|_| true)
    }

    /// Anzahl registrierter Komponenten
    pub fn anzahl(&self) -> usize {
        self.innen.read().eintraege.len()
    }

    fn gefiltert<T: Any + Send + Sync>(&self, filter: impl Fn(&Herkunft) -> bool) -> Vec<Arc<T>> {
        self.innen
            .read()
            .eintraege
            .iter()
            .filter(|e| filter(&e.herkunft))
            .filter_map(|e| Arc::clone(&e.wert).downcast::<T>().ok())
            .collect()
    }
}

impl Default for KomponentenSpeicher {
    fn default() -> Self {
        Self::neu()
    }
}

/// Host-Kontext – das explizite Handle, das Providern bei der Aggregation
/// uebergeben wird, damit sie gemeinsame Host-Ressourcen nachschlagen
/// koennen. Kein verstecktes Modul-Singleton.
#[derive(Clone)]
pub struct HostKontext {
    speicher: Arc<KomponentenSpeicher>,
}

impl HostKontext {
    /// Erstellt einen Host-Kontext ueber einem Komponenten-Speicher
    pub fn neu(speicher: Arc<KomponentenSpeicher>) -> Self {
        Self { speicher }
    }

    /// Gibt den unterliegenden Speicher zurueck
    pub fn speicher(&self) -> &Arc<KomponentenSpeicher> {
        &self.speicher
    }

    /// Schlaegt eine geteilte Host-Ressource typisiert nach
    pub fn ressource<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.speicher
            .nach_name(name)
            .and_then(|wert| wert.downcast::<T>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn einfuegen_und_nach_name() {
        let speicher = KomponentenSpeicher::neu();
        speicher
            .einfuegen("begruessung", Herkunft::Host, "hallo".to_string())
            .unwrap();

        let wert = speicher.nach_name("begruessung").unwrap();
        assert_eq!(*wert.downcast::<String>().unwrap(), "hallo");
        assert!(speicher.nach_name("unbekannt").is_none());
    }

    #[test]
    fn doppelter_name_fehlschlaegt() {
        let speicher = KomponentenSpeicher::neu();
        speicher.einfuegen("x", Herkunft::Host, 1u32).unwrap();
        let err = speicher.einfuegen("x", Herkunft::Host, 2u32).unwrap_err();
        assert!(matches!(err, ErweiterungsFehler::KomponenteVorhanden(_)));
    }

    #[test]
    fn entfernen_unbekannt_fehlschlaegt() {
        let speicher = KomponentenSpeicher::neu();
        let err = speicher.entfernen("fehlt").unwrap_err();
        assert!(matches!(err, ErweiterungsFehler::KomponenteNichtGefunden(_)));
    }

    #[test]
    fn herkunft_filter() {
        let speicher = KomponentenSpeicher::neu();
        let plugin_a = PluginId::neu("a");
        let plugin_b = PluginId::neu("b");
        speicher.plugin_anmelden(&plugin_a);
        speicher.plugin_anmelden(&plugin_b);

        speicher.einfuegen("h", Herkunft::Host, 1u32).unwrap();
        speicher
            .einfuegen("a1", Herkunft::Plugin(plugin_a.clone()), 2u32)
            .unwrap();
        speicher
            .einfuegen("b1", Herkunft::Plugin(plugin_b.clone()), 3u32)
            .unwrap();

        assert_eq!(speicher.host_komponenten::<u32>().len(), 1);
        assert_eq!(speicher.plugin_komponenten::<u32>(&plugin_a).unwrap().len(), 1);
        // Registrierungsreihenfolge bleibt erhalten
        let alle = speicher.alle_komponenten::<u32>();
        assert_eq!(
            alle.iter().map(|v| **v).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn unbekanntes_plugin_ist_fehler_leere_treffer_nicht() {
        let speicher = KomponentenSpeicher::neu();
        let bekannt = PluginId::neu("bekannt");
        speicher.plugin_anmelden(&bekannt);

        // Bekanntes Plugin ohne Komponenten: leere Sequenz
        assert!(speicher.plugin_komponenten::<u32>(&bekannt).unwrap().is_empty());

        // Unbekanntes Plugin: Fehler
        let err = speicher
            .plugin_komponenten::<u32>(&PluginId::neu("fremd"))
            .unwrap_err();
        assert!(matches!(err, ErweiterungsFehler::PluginNichtGefunden(_)));
    }

    #[test]
    fn abmelden_macht_plugin_unbekannt() {
        let speicher = KomponentenSpeicher::neu();
        let id = PluginId::neu("fluechtig");
        speicher.plugin_anmelden(&id);
        assert!(speicher.ist_plugin_bekannt(&id));

        speicher.plugin_abmelden(&id);
        assert!(!speicher.ist_plugin_bekannt(&id));
        assert!(speicher.plugin_komponenten::<u32>(&id).is_err());
    }

    #[test]
    fn host_kontext_ressource_typisiert() {
        let speicher = Arc::new(KomponentenSpeicher::neu());
        let geteilt = Arc::new(42u64);
        speicher
            .einfuegen_geteilt("antwort", Herkunft::Host, Arc::clone(&geteilt))
            .unwrap();

        let kontext = HostKontext::neu(Arc::clone(&speicher));
        assert_eq!(*kontext.ressource::<u64>("antwort").unwrap(), 42);
        // Falscher Typ liefert None
        assert!(kontext.ressource::<u32>("antwort").is_none());
        assert!(kontext.ressource::<u64>("fehlt").is_none());
    }
}
