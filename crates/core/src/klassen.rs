//! Typ-Beschreibungen – das Ergebnis des externen Klassen-Scanners
//!
//! Der Scanner liefert pro Plugin eine Liste von [`TypBeschreibung`]en:
//! den einfachen Typnamen, die am Typ deklarierten Metadaten-Tags und
//! deren Attributwerte. Die Pipeline selbst scannt nie – sie konsumiert
//! nur dieses bereits klassifizierbare Ergebnis.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Beschreibung eines in einem Plugin deklarierten Typs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypBeschreibung {
    /// Einfacher Typname, z.B. "LagerPosten"
    name: String,
    /// Metadaten-Tags in Deklarationsreihenfolge
    #[serde(default)]
    tags: Vec<String>,
    /// Attributwerte der Tags, z.B. "alias" -> "posten"
    #[serde(default)]
    attribute: HashMap<String, String>,
}

impl TypBeschreibung {
    /// Erstellt eine Beschreibung ohne Tags und Attribute
    pub fn neu(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            attribute: HashMap::new(),
        }
    }

    /// Fuegt ein Metadaten-Tag hinzu
    pub fn mit_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Setzt einen Attributwert
    pub fn mit_attribut(mut self, name: impl Into<String>, wert: impl Into<String>) -> Self {
        self.attribute.insert(name.into(), wert.into());
        self
    }

    /// Gibt den einfachen Typnamen zurueck
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prueft ob der Typ ein bestimmtes Tag traegt
    pub fn hat_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Gibt einen Attributwert zurueck falls vorhanden
    pub fn attribut(&self, name: &str) -> Option<&str> {
        self.attribute.get(name).map(String::as_str)
    }
}
