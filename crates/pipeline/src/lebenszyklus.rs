//! Plugin-Lebenszyklus – Zustandsmaschine mit garantierter Aufraeum-Ausfuehrung
//!
//! Der Controller orchestriert pro Plugin-Instanz die feste Abfolge aus
//! Plugin-eigenen Haken und den Pipeline-Ereignissen des Rahmenwerks.
//! Die Sequenzierung ist eine Invariante der Controller-Methoden selbst:
//! ein fehlschlagender Haken wird protokolliert und verschluckt, der
//! Rahmenwerk-Teil laeuft in jedem Fall. Ein fehlerhaftes Plugin kann so
//! keine Eintraege in globalen Registries zuruecklassen.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use steckwerk_core::{PluginMeta, PluginZustand, TypBeschreibung};
use tracing::{debug, error, info};

use crate::error::{ErweiterungsFehler, Result};
use crate::kontext::RegistrierungsKontext;
use crate::registry::PipelineRegistry;
use crate::speicher::KomponentenSpeicher;

/// Optionale Haken, die ein Plugin beisteuern kann
///
/// Alle Haken sind standardmaessig wirkungslos. Fehler aus Haken werden
/// vom Controller protokolliert und niemals weitergereicht.
pub trait PluginHaken: Send + Sync {
    /// Wird beim Starten aufgerufen
    fn beim_start(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Wird beim Stoppen aufgerufen
    fn beim_stopp(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Wird beim Loeschen aufgerufen
    fn beim_loeschen(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Standard-Haken ohne Verhalten
pub struct LeererHaken;

impl PluginHaken for LeererHaken {}

/// Lebenszyklus-Controller einer Plugin-Instanz
///
/// Exklusiver Eigentuemer des [`RegistrierungsKontext`]s. Die Uebergaenge
/// werden vom externen Plugin-Manager angestossen, ein Plugin nach dem
/// anderen.
pub struct PluginController {
    registry: Arc<PipelineRegistry>,
    speicher: Arc<KomponentenSpeicher>,
    haken: Box<dyn PluginHaken>,
    kontext: RegistrierungsKontext,
    zustand: PluginZustand,
    registriert: bool,
    gestartet_am: Option<DateTime<Utc>>,
    gestoppt_am: Option<DateTime<Utc>>,
}

impl PluginController {
    /// Erstellt den Controller fuer eine entdeckte Plugin-Instanz
    ///
    /// Legt den Registrierungs-Kontext an, klassifiziert die vom Scanner
    /// gelieferten Typen gegen alle Klassen-Gruppen und meldet das Plugin
    /// im Komponenten-Speicher an.
    pub fn neu(
        meta: PluginMeta,
        typen: Vec<TypBeschreibung>,
        registry: Arc<PipelineRegistry>,
        speicher: Arc<KomponentenSpeicher>,
        haken: Box<dyn PluginHaken>,
    ) -> Self {
        let mut kontext = RegistrierungsKontext::neu(meta);
        kontext.klassifizieren(&typen, registry.klassen_gruppen());
        speicher.plugin_anmelden(kontext.plugin_id());
        debug!(plugin = %kontext.plugin_id(), "Plugin-Instanz angelegt und klassifiziert");

        Self {
            registry,
            speicher,
            haken,
            kontext,
            zustand: PluginZustand::Erstellt,
            registriert: false,
            gestartet_am: None,
            gestoppt_am: None,
        }
    }

    /// Aktueller Zustand
    pub fn zustand(&self) -> PluginZustand {
        self.zustand
    }

    /// Lesezugriff auf den Registrierungs-Kontext
    pub fn kontext(&self) -> &RegistrierungsKontext {
        &self.kontext
    }

    /// Prueft ob die Pipeline-Registrierung aktiv ist
    pub fn ist_registriert(&self) -> bool {
        self.registriert
    }

    /// Zeitpunkt des letzten Starts
    pub fn gestartet_am(&self) -> Option<DateTime<Utc>> {
        self.gestartet_am
    }

    /// Zeitpunkt des letzten Stopps
    pub fn gestoppt_am(&self) -> Option<DateTime<Utc>> {
        self.gestoppt_am
    }

    /// Fuehrt die Pipeline-Registrierung fuer diese Instanz aus
    ///
    /// Ressourcen-Lader, Pipe-Verarbeiter und Nach-Verarbeiter laufen in
    /// Prioritaetsreihenfolge gegen den Kontext. Die Instanz gilt schon
    /// vor der ersten Stufe als registriert, damit auch eine nur teilweise
    /// gelungene Registrierung beim Stopp exakt zurueckgenommen wird.
    pub fn registrieren(&mut self) -> Result<()> {
        if self.zustand == PluginZustand::Geloescht {
            return Err(ErweiterungsFehler::PluginGeloescht(
                self.kontext.plugin_id().clone(),
            ));
        }
        if self.registriert {
            return Err(ErweiterungsFehler::BereitsRegistriert(
                self.kontext.plugin_id().clone(),
            ));
        }

        self.registriert = true;
        for lader in self.registry.ressourcen_lader() {
            lader.laden(&mut self.kontext)?;
        }
        for verarbeiter in self.registry.pipe_verarbeiter() {
            verarbeiter.registrieren(&mut self.kontext)?;
        }
        for nach in self.registry.nach_verarbeiter() {
            nach.registrieren(&mut self.kontext)?;
        }

        info!(plugin = %self.kontext.plugin_id(), "Plugin registriert");
        Ok(())
    }

    /// Startet das Plugin
    pub fn starten(&mut self) -> Result<()> {
        match self.zustand {
            PluginZustand::Erstellt | PluginZustand::Gestoppt => {}
            von => {
                return Err(ErweiterungsFehler::UngueltigerUebergang {
                    von,
                    nach: PluginZustand::Gestartet,
                })
            }
        }

        if let Err(e) = self.haken.beim_start() {
            error!(plugin = %self.kontext.plugin_id(), fehler = %e, "Start-Haken fehlgeschlagen");
        }
        // Rahmenwerk-Teil laeuft immer: Buchfuehrung
        self.gestartet_am = Some(Utc::now());
        self.zustand = PluginZustand::Gestartet;
        info!(plugin = %self.kontext.plugin_id(), "Plugin gestartet");
        Ok(())
    }

    /// Stoppt das Plugin und nimmt seine Registrierung zurueck
    pub fn stoppen(&mut self) -> Result<()> {
        if self.zustand != PluginZustand::Gestartet {
            return Err(ErweiterungsFehler::UngueltigerUebergang {
                von: self.zustand,
                nach: PluginZustand::Gestoppt,
            });
        }

        if let Err(e) = self.haken.beim_stopp() {
            error!(plugin = %self.kontext.plugin_id(), fehler = %e, "Stopp-Haken fehlgeschlagen");
        }
        // Rahmenwerk-Teil laeuft immer, auch nach einem Haken-Fehler
        self.deregistrieren_intern();
        self.gestoppt_am = Some(Utc::now());
        self.zustand = PluginZustand::Gestoppt;
        info!(plugin = %self.kontext.plugin_id(), "Plugin gestoppt");
        Ok(())
    }

    /// Loescht das Plugin endgueltig – Endzustand
    pub fn loeschen(&mut self) -> Result<()> {
        if self.zustand == PluginZustand::Geloescht {
            return Err(ErweiterungsFehler::UngueltigerUebergang {
                von: PluginZustand::Geloescht,
                nach: PluginZustand::Geloescht,
            });
        }

        if let Err(e) = self.haken.beim_loeschen() {
            error!(plugin = %self.kontext.plugin_id(), fehler = %e, "Loesch-Haken fehlgeschlagen");
        }
        // Rahmenwerk-Teil laeuft immer: restliche Registrierung zurueck,
        // Plugin abmelden
        self.deregistrieren_intern();
        self.speicher.plugin_abmelden(self.kontext.plugin_id());
        self.zustand = PluginZustand::Geloescht;
        info!(plugin = %self.kontext.plugin_id(), "Plugin geloescht");
        Ok(())
    }

    /// Nimmt die Registrierung in umgekehrter Prioritaetsreihenfolge zurueck
    ///
    /// Laeuft hoechstens einmal pro Registrierung. Fehler einzelner Stufen
    /// werden protokolliert und stoppen die restliche Aufraeumarbeit nicht.
    fn deregistrieren_intern(&mut self) {
        if !self.registriert {
            return;
        }

        for nach in self.registry.nach_verarbeiter().iter().rev() {
            if let Err(e) = nach.deregistrieren(&mut self.kontext) {
                error!(
                    plugin = %self.kontext.plugin_id(),
                    stufe = nach.schluessel(),
                    fehler = %e,
                    "Deregistrierung eines Nach-Verarbeiters fehlgeschlagen"
                );
            }
        }
        for verarbeiter in self.registry.pipe_verarbeiter().iter().rev() {
            if let Err(e) = verarbeiter.deregistrieren(&mut self.kontext) {
                error!(
                    plugin = %self.kontext.plugin_id(),
                    stufe = verarbeiter.schluessel(),
                    fehler = %e,
                    "Deregistrierung eines Pipe-Verarbeiters fehlgeschlagen"
                );
            }
        }
        for lader in self.registry.ressourcen_lader().iter().rev() {
            if let Err(e) = lader.entladen(&mut self.kontext) {
                error!(
                    plugin = %self.kontext.plugin_id(),
                    stufe = lader.schluessel(),
                    fehler = %e,
                    "Entladen eines Ressourcen-Laders fehlgeschlagen"
                );
            }
        }

        self.registriert = false;
        debug!(plugin = %self.kontext.plugin_id(), "Plugin deregistriert");
    }
}
