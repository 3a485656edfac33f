//! Klassen-Gruppe fuer Entitaets-Typen

use steckwerk_core::TypBeschreibung;
use steckwerk_pipeline::KlassenGruppe;

/// Metadaten-Tag an dem Entitaets-Typen erkannt werden
pub const ENTITAETS_TAG: &str = "entitaet";

/// Gruppiert alle Typen die das Entitaets-Tag tragen
pub struct EntitaetsGruppe;

impl EntitaetsGruppe {
    /// Gruppen-ID unter der die Treffer im Kontext liegen
    pub const GRUPPEN_ID: &'static str = "entitaet";
}

impl KlassenGruppe for EntitaetsGruppe {
    fn gruppen_id(&self) -> &str {
        Self::GRUPPEN_ID
    }

    fn filtern(&self, typ: &TypBeschreibung) -> bool {
        typ.hat_tag(ENTITAETS_TAG)
    }
}
