//! Pipeline-Registry – prozessweite, einmalig aggregierte Stufen-Sammlung
//!
//! Die Registry wird genau einmal aus allen Erweiterungs-Providern
//! aggregiert und ist danach unveraenderlich; Leser brauchen keine Sperre.
//! Ein zweiter Aggregations-Versuch schlaegt fehl statt still anzuhaengen.
//! Ein fehlerhafter Provider wird protokolliert und uebersprungen – eine
//! einzelne kaputte Erweiterung darf den Rest des Systems nicht am
//! Initialisieren hindern.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::error::{ErweiterungsFehler, Result};
use crate::provider::ErweiterungsProvider;
use crate::speicher::HostKontext;
use crate::stufe::{KlassenGruppe, NachVerarbeiter, PipeVerarbeiter, RessourcenLader};

/// Die vier Stufen-Sammlungen nach Abschluss der Aggregation
#[derive(Default)]
struct Stufen {
    ressourcen_lader: Vec<Arc<dyn RessourcenLader>>,
    pipe_verarbeiter: Vec<Arc<dyn PipeVerarbeiter>>,
    klassen_gruppen: Vec<Arc<dyn KlassenGruppe>>,
    nach_verarbeiter: Vec<Arc<dyn NachVerarbeiter>>,
}

impl Stufen {
    fn anfuegen(&mut self, beitrag: Stufen) {
        self.ressourcen_lader.extend(beitrag.ressourcen_lader);
        self.pipe_verarbeiter.extend(beitrag.pipe_verarbeiter);
        self.klassen_gruppen.extend(beitrag.klassen_gruppen);
        self.nach_verarbeiter.extend(beitrag.nach_verarbeiter);
    }
}

/// Prozessweite Registry aller Pipeline-Stufen
///
/// Wird als explizites Handle herumgereicht, nicht als verstecktes
/// Modul-Singleton.
pub struct PipelineRegistry {
    initialisiert: AtomicBool,
    sperre: Mutex<()>,
    stufen: OnceLock<Stufen>,
}

impl PipelineRegistry {
    /// Erstellt eine leere, noch nicht aggregierte Registry
    pub fn neu() -> Self {
        Self {
            initialisiert: AtomicBool::new(false),
            sperre: Mutex::new(()),
            stufen: OnceLock::new(),
        }
    }

    /// Aggregiert alle Provider – genau einmal pro Prozess
    ///
    /// Gleichzeitige Aufrufe serialisieren; alle ausser dem ersten schlagen
    /// mit [`ErweiterungsFehler::BereitsInitialisiert`] fehl. Die drei
    /// geordneten Kategorien werden stabil nach Prioritaet sortiert
    /// (gleiche Prioritaet behaelt die Entdeckungsreihenfolge); die
    /// Klassen-Gruppen bleiben unsortiert.
    pub fn aggregieren(
        &self,
        provider: &[Box<dyn ErweiterungsProvider>],
        host: &HostKontext,
    ) -> Result<()> {
        let _fuehrung = self.sperre.lock();
        if self.initialisiert.load(Ordering::Acquire) {
            return Err(ErweiterungsFehler::BereitsInitialisiert);
        }

        let mut stufen = Stufen::default();
        for p in provider {
            if let Err(e) = p.initialisieren(host) {
                error!(
                    provider = p.schluessel(),
                    fehler = %e,
                    "Provider-Initialisierung fehlgeschlagen, Provider wird uebersprungen"
                );
                continue;
            }
            match Self::provider_einsammeln(p.as_ref(), host) {
                Ok(beitrag) => stufen.anfuegen(beitrag),
                Err(e) => {
                    error!(
                        provider = p.schluessel(),
                        fehler = %e,
                        "Einsammeln der Stufen fehlgeschlagen, Provider wird uebersprungen"
                    );
                }
            }
        }

        // Stabile Prioritaets-Sortierung der drei geordneten Kategorien;
        // Klassen-Gruppen haben bewusst keine verlaessliche Reihenfolge.
        stufen.ressourcen_lader.sort_by_key(|l| l.prioritaet());
        stufen.pipe_verarbeiter.sort_by_key(|v| v.prioritaet());
        stufen.nach_verarbeiter.sort_by_key(|n| n.prioritaet());

        info!(
            ressourcen_lader = stufen.ressourcen_lader.len(),
            pipe_verarbeiter = stufen.pipe_verarbeiter.len(),
            klassen_gruppen = stufen.klassen_gruppen.len(),
            nach_verarbeiter = stufen.nach_verarbeiter.len(),
            "Pipeline-Registry aggregiert"
        );

        // Kann nicht fehlschlagen: einziger Schreibzugriff, unter der Sperre
        let _ = self.stufen.set(stufen);
        self.initialisiert.store(true, Ordering::Release);
        Ok(())
    }

    /// Sammelt die Beitraege eines Providers ein
    ///
    /// Eine fehlende Host-Ressource ueberspringt nur die betroffene
    /// Kategorie; jeder andere Fehler verwirft den gesamten Beitrag des
    /// Providers. Stufen deren `initialisieren` fehlschlaegt werden
    /// einzeln aussortiert.
    fn provider_einsammeln(p: &dyn ErweiterungsProvider, host: &HostKontext) -> Result<Stufen> {
        let mut beitrag = Stufen::default();

        match p.ressourcen_lader(host) {
            Ok(mut lader) => {
                lader.retain(|l| Self::stufe_initialisieren(l.schluessel(), l.initialisieren()));
                beitrag.ressourcen_lader = lader;
            }
            Err(ErweiterungsFehler::FehlendeRessource(ressource)) => {
                warn!(
                    provider = p.schluessel(),
                    ressource = %ressource,
                    "Host-Ressource fehlt, Kategorie Ressourcen-Lader wird uebersprungen"
                );
            }
            Err(e) => return Err(e),
        }

        match p.pipe_verarbeiter(host) {
            Ok(mut verarbeiter) => {
                verarbeiter
                    .retain(|v| Self::stufe_initialisieren(v.schluessel(), v.initialisieren()));
                beitrag.pipe_verarbeiter = verarbeiter;
            }
            Err(ErweiterungsFehler::FehlendeRessource(ressource)) => {
                warn!(
                    provider = p.schluessel(),
                    ressource = %ressource,
                    "Host-Ressource fehlt, Kategorie Pipe-Verarbeiter wird uebersprungen"
                );
            }
            Err(e) => return Err(e),
        }

        match p.klassen_gruppen(host) {
            Ok(mut gruppen) => {
                gruppen.retain(|g| Self::stufe_initialisieren(g.gruppen_id(), g.initialisieren()));
                beitrag.klassen_gruppen = gruppen;
            }
            Err(ErweiterungsFehler::FehlendeRessource(ressource)) => {
                warn!(
                    provider = p.schluessel(),
                    ressource = %ressource,
                    "Host-Ressource fehlt, Kategorie Klassen-Gruppen wird uebersprungen"
                );
            }
            Err(e) => return Err(e),
        }

        match p.nach_verarbeiter(host) {
            Ok(mut verarbeiter) => {
                verarbeiter
                    .retain(|n| Self::stufe_initialisieren(n.schluessel(), n.initialisieren()));
                beitrag.nach_verarbeiter = verarbeiter;
            }
            Err(ErweiterungsFehler::FehlendeRessource(ressource)) => {
                warn!(
                    provider = p.schluessel(),
                    ressource = %ressource,
                    "Host-Ressource fehlt, Kategorie Nach-Verarbeiter wird uebersprungen"
                );
            }
            Err(e) => return Err(e),
        }

        Ok(beitrag)
    }

    fn stufe_initialisieren(schluessel: &str, ergebnis: Result<()>) -> bool {
        match ergebnis {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    stufe = schluessel,
                    fehler = %e,
                    "Stufen-Initialisierung fehlgeschlagen, Stufe wird uebersprungen"
                );
                false
            }
        }
    }

    /// Prueft ob die Aggregation abgeschlossen ist
    pub fn ist_initialisiert(&self) -> bool {
        self.initialisiert.load(Ordering::Acquire)
    }

    /// Ressourcen-Lader in Prioritaetsreihenfolge
    pub fn ressourcen_lader(&self) -> &[Arc<dyn RessourcenLader>] {
        self.stufen
            .get()
            .map(|s| s.ressourcen_lader.as_slice())
            .unwrap_or(&[])
    }

    /// Pipe-Verarbeiter in Prioritaetsreihenfolge
    pub fn pipe_verarbeiter(&self) -> &[Arc<dyn PipeVerarbeiter>] {
        self.stufen
            .get()
            .map(|s| s.pipe_verarbeiter.as_slice())
            .unwrap_or(&[])
    }

    /// Klassen-Gruppen – ohne garantierte Reihenfolge
    pub fn klassen_gruppen(&self) -> &[Arc<dyn KlassenGruppe>] {
        self.stufen
            .get()
            .map(|s| s.klassen_gruppen.as_slice())
            .unwrap_or(&[])
    }

    /// Nach-Verarbeiter in Prioritaetsreihenfolge
    pub fn nach_verarbeiter(&self) -> &[Arc<dyn NachVerarbeiter>] {
        self.stufen
            .get()
            .map(|s| s.nach_verarbeiter.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for PipelineRegistry {
    fn default() -> Self {
        Self::neu()
    }
}
