//! Stufen-Vertraege der Erweiterungs-Pipeline
//!
//! Vier Kategorien von Stufen-Komponenten, die ein Provider beisteuern
//! kann. Die zentrale Korrektheits-Eigenschaft des gesamten Systems:
//! `registrieren` gefolgt von `deregistrieren` auf demselben Kontext
//! hinterlaesst jede gemeinsame Ressource exakt im vorherigen Zustand –
//! unabhaengig davon, wie sich die Aufrufe anderer Plugins dazwischen
//! verschachteln. Jede Stufe merkt sich ihre eigenen Aenderungen im
//! [`RegistrierungsKontext`] und nimmt genau diese zurueck.

use steckwerk_core::TypBeschreibung;

use crate::error::Result;
use crate::kontext::RegistrierungsKontext;
use crate::prioritaet::OrdnungsPrioritaet;

/// Laedt gemeinsame Ressourcen bevor die Pipe-Verarbeiter laufen
///
/// Prioritaetsgeordnet. `entladen` laeuft beim Entfernen des Plugins in
/// umgekehrter Reihenfolge.
pub trait RessourcenLader: Send + Sync {
    /// Eindeutiger Schluessel innerhalb der Kategorie
    fn schluessel(&self) -> &str;

    /// Ausfuehrungs-Prioritaet (Standard: mittel)
    fn prioritaet(&self) -> OrdnungsPrioritaet {
        OrdnungsPrioritaet::mittel()
    }

    /// Einmalige globale Initialisierung (idempotent)
    fn initialisieren(&self) -> Result<()> {
        Ok(())
    }

    /// Laedt Ressourcen fuer eine Plugin-Instanz
    fn laden(&self, kontext: &mut RegistrierungsKontext) -> Result<()>;

    /// Entlaedt die zuvor geladenen Ressourcen
    fn entladen(&self, kontext: &mut RegistrierungsKontext) -> Result<()>;
}

/// Prioritaetsgeordneter Pipe-Verarbeiter – das Arbeitstier der Pipeline
pub trait PipeVerarbeiter: Send + Sync {
    /// Eindeutiger Schluessel innerhalb der Kategorie
    fn schluessel(&self) -> &str;

    /// Ausfuehrungs-Prioritaet (Standard: mittel)
    fn prioritaet(&self) -> OrdnungsPrioritaet {
        OrdnungsPrioritaet::mittel()
    }

    /// Einmalige globale Initialisierung (idempotent)
    fn initialisieren(&self) -> Result<()> {
        Ok(())
    }

    /// Registriert die Beitraege einer Plugin-Instanz in gemeinsamen
    /// Ressourcen und vermerkt alles Eingetragene im Kontext
    fn registrieren(&self, kontext: &mut RegistrierungsKontext) -> Result<()>;

    /// Nimmt exakt die im Kontext vermerkten Eintraege zurueck –
    /// nie mehr, nie weniger
    fn deregistrieren(&self, kontext: &mut RegistrierungsKontext) -> Result<()>;
}

/// Klassen-Gruppe: Praedikat ueber die Metadaten-Tags eines Typs
///
/// Ungeordnete Kategorie – weder Aggregation noch Deregistrierung
/// garantieren eine relative Reihenfolge zwischen Klassen-Gruppen.
pub trait KlassenGruppe: Send + Sync {
    /// Gruppen-ID unter der die Treffer im Kontext abgelegt werden
    fn gruppen_id(&self) -> &str;

    /// Einmalige globale Initialisierung (idempotent)
    fn initialisieren(&self) -> Result<()> {
        Ok(())
    }

    /// Entscheidet ob ein Typ zur Gruppe gehoert
    fn filtern(&self, typ: &TypBeschreibung) -> bool;
}

/// Prioritaetsgeordneter Nach-Verarbeiter – laeuft nach allen
/// Pipe-Verarbeitern, mit demselben Umkehrbarkeits-Vertrag
pub trait NachVerarbeiter: Send + Sync {
    /// Eindeutiger Schluessel innerhalb der Kategorie
    fn schluessel(&self) -> &str;

    /// Ausfuehrungs-Prioritaet (Standard: mittel)
    fn prioritaet(&self) -> OrdnungsPrioritaet {
        OrdnungsPrioritaet::mittel()
    }

    /// Einmalige globale Initialisierung (idempotent)
    fn initialisieren(&self) -> Result<()> {
        Ok(())
    }

    /// Registriert die Beitraege einer Plugin-Instanz
    fn registrieren(&self, kontext: &mut RegistrierungsKontext) -> Result<()>;

    /// Nimmt exakt die vermerkten Beitraege zurueck
    fn deregistrieren(&self, kontext: &mut RegistrierungsKontext) -> Result<()>;
}
