//! Alias-Registry – gemeinsame Tabelle von Typ-Aliasen
//!
//! Eine prozessweite Host-Ressource, in die viele Plugins ueber ihre
//! gesamte Lebenszeit hinein- und wieder herausschreiben. Thread-sicher
//! via DashMap.

use dashmap::DashMap;

/// Name unter dem der Host die Registry im Komponenten-Speicher ablegt
pub const RESSOURCEN_NAME: &str = "alias-registry";

/// Gemeinsame Alias-Tabelle: Alias -> Typname
pub struct AliasRegistry {
    aliase: DashMap<String, String>,
}

impl AliasRegistry {
    /// Erstellt eine leere Registry
    pub fn neu() -> Self {
        Self {
            aliase: DashMap::new(),
        }
    }

    /// Traegt einen Alias ein; ein bestehender Eintrag wird ersetzt
    pub fn eintragen(&self, alias: impl Into<String>, typ_name: impl Into<String>) {
        self.aliase.insert(alias.into(), typ_name.into());
    }

    /// Entfernt einen Alias und gibt den Typnamen zurueck
    pub fn entfernen(&self, alias: &str) -> Option<String> {
        self.aliase.remove(alias).map(|(_, typ_name)| typ_name)
    }

    /// Loest einen Alias zum Typnamen auf
    pub fn aufloesen(&self, alias: &str) -> Option<String> {
        self.aliase.get(alias).map(|eintrag| eintrag.value().clone())
    }

    /// Prueft ob ein Alias eingetragen ist
    pub fn enthaelt(&self, alias: &str) -> bool {
        self.aliase.contains_key(alias)
    }

    /// Anzahl eingetragener Aliase
    pub fn anzahl(&self) -> usize {
        self.aliase.len()
    }

    /// Prueft ob die Tabelle leer ist
    pub fn ist_leer(&self) -> bool {
        self.aliase.is_empty()
    }

    /// Alle Eintraege, alphabetisch nach Alias sortiert
    pub fn alle(&self) -> Vec<(String, String)> {
        let mut eintraege: Vec<(String, String)> = self
            .aliase
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        eintraege.sort();
        eintraege
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::neu()
    }
}
