//! Namensraum-Qualifizierung fuer Plugin-Komponenten
//!
//! Leitet kollisionsfreie Komponenten-Namen ab, indem der Standard-Name
//! mit einem Plugin-Praefix und optionalem Suffix umschlossen wird.
//! Ohne Praefix und Suffix bleibt der Standard-Name unveraendert –
//! Host-eigene Komponenten sind damit nie betroffen.

use steckwerk_core::TypBeschreibung;

/// Trennzeichen zwischen Praefix, Basisname und Suffix
pub const TRENNZEICHEN: char = '@';

/// Leitet den Standard-Namen aus einem einfachen Typnamen ab
///
/// Erster Buchstabe klein, Rest unveraendert: "LagerPosten" -> "lagerPosten".
pub fn standard_name(typ_name: &str) -> String {
    let mut zeichen = typ_name.chars();
    match zeichen.next() {
        Some(erstes) => erstes.to_lowercase().chain(zeichen).collect(),
        None => String::new(),
    }
}

/// Generator fuer namensraum-qualifizierte Komponenten-Namen
#[derive(Debug, Clone)]
pub struct NamensGenerator {
    praefix: String,
    suffix: String,
}

impl NamensGenerator {
    /// Erstellt einen Generator fuer einen Plugin-Namensraum
    ///
    /// Leere Plugin-ID: kein Praefix. Leeres Suffix: kein Suffix.
    pub fn neu(plugin_id: &str, suffix: &str) -> Self {
        let praefix = if plugin_id.is_empty() {
            String::new()
        } else {
            format!("{plugin_id}{TRENNZEICHEN}")
        };
        let suffix = if suffix.is_empty() {
            String::new()
        } else {
            format!("{TRENNZEICHEN}{suffix}")
        };
        Self { praefix, suffix }
    }

    /// Generator ohne Namensraum – qualifiziert identisch
    pub fn unqualifiziert() -> Self {
        Self::neu("", "")
    }

    /// Qualifiziert einen Basisnamen
    pub fn qualifizieren(&self, basis: &str) -> String {
        format!("{}{}{}", self.praefix, basis, self.suffix)
    }

    /// Qualifiziert den Standard-Namen eines Typs
    ///
    /// Umschliesst die Standard-Ableitung statt sie zu ersetzen.
    pub fn fuer_typ(&self, typ: &TypBeschreibung) -> String {
        self.qualifizieren(&standard_name(typ.name()))
    }
}
