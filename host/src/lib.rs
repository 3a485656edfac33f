//! steckwerk-host – Demo-Host fuer die Steckwerk-Pipeline
//!
//! Verdrahtet Komponenten-Speicher, Alias-Erweiterung und
//! Pipeline-Registry und fuehrt zwei Beispiel-Plugins durch ihren
//! kompletten Lebenszyklus. Die Rolle des externen Plugin-Managers und
//! des Klassen-Scanners uebernimmt hier der Host selbst.

pub mod config;

use std::sync::Arc;

use anyhow::Result;
use steckwerk_alias::{AliasErweiterung, AliasRegistry, RESSOURCEN_NAME};
use steckwerk_core::{PluginId, PluginMeta, TypBeschreibung};
use steckwerk_pipeline::{
    ErweiterungsProvider, Herkunft, HostKontext, KomponentenSpeicher, NamensGenerator,
    PipelineRegistry, PluginController, PluginHaken, PluginNutzer,
};
use tracing::info;

use crate::config::HostConfig;

/// Plugin-Haken der jeden Uebergang protokolliert
struct ProtokollHaken {
    plugin: String,
}

impl PluginHaken for ProtokollHaken {
    fn beim_start(&self) -> anyhow::Result<()> {
        info!(plugin = %self.plugin, "Plugin-Haken: Start");
        Ok(())
    }

    fn beim_stopp(&self) -> anyhow::Result<()> {
        info!(plugin = %self.plugin, "Plugin-Haken: Stopp");
        Ok(())
    }

    fn beim_loeschen(&self) -> anyhow::Result<()> {
        info!(plugin = %self.plugin, "Plugin-Haken: Loeschen");
        Ok(())
    }
}

/// Der verdrahtete Demo-Host
pub struct Host {
    config: HostConfig,
    speicher: Arc<KomponentenSpeicher>,
    registry: Arc<PipelineRegistry>,
    aliase: Arc<AliasRegistry>,
}

impl Host {
    /// Baut den Host auf: Speicher, Alias-Registry als Host-Ressource,
    /// einmalige Aggregation aller Provider
    pub fn neu(config: HostConfig) -> Result<Self> {
        let speicher = Arc::new(KomponentenSpeicher::neu());
        let aliase = Arc::new(AliasRegistry::neu());
        speicher.einfuegen_geteilt(RESSOURCEN_NAME, Herkunft::Host, Arc::clone(&aliase))?;

        let registry = Arc::new(PipelineRegistry::neu());
        let provider: Vec<Box<dyn ErweiterungsProvider>> = vec![Box::new(
            AliasErweiterung::mit_aliasen(config.aliase.zuordnung.clone()),
        )];
        registry.aggregieren(&provider, &HostKontext::neu(Arc::clone(&speicher)))?;

        Ok(Self {
            config,
            speicher,
            registry,
            aliase,
        })
    }

    /// Lesende Lookup-Fassade ueber den Komponenten-Speicher
    pub fn nutzer(&self) -> PluginNutzer {
        PluginNutzer::neu(Arc::clone(&self.speicher))
    }

    /// Legt den Lebenszyklus-Controller fuer ein entdecktes Plugin an
    ///
    /// Die Typen-Liste kommt im echten Betrieb vom externen Scanner.
    pub fn plugin_anlegen(
        &self,
        meta: PluginMeta,
        typen: Vec<TypBeschreibung>,
    ) -> PluginController {
        let haken = Box::new(ProtokollHaken {
            plugin: meta.id.to_string(),
        });
        PluginController::neu(
            meta,
            typen,
            Arc::clone(&self.registry),
            Arc::clone(&self.speicher),
            haken,
        )
    }

    /// Fuehrt die Demo aus: zwei Plugins laden, nachschlagen, entladen
    pub fn ausfuehren(&self) -> Result<()> {
        let lager_id = PluginId::neu("lager");
        let mut lager = self.plugin_anlegen(
            PluginMeta::neu(lager_id.clone(), "Lagerverwaltung", "1.2.0")
                .mit_beschreibung("Verwaltet Lagerbestaende"),
            vec![
                TypBeschreibung::neu("LagerPosten").mit_tag("entitaet"),
                TypBeschreibung::neu("LagerBestand")
                    .mit_tag("entitaet")
                    .mit_attribut("alias", "bestand"),
                TypBeschreibung::neu("LagerHelfer"),
            ],
        );

        let versand_id = PluginId::neu("versand");
        let mut versand = self.plugin_anlegen(
            PluginMeta::neu(versand_id.clone(), "Versandabwicklung", "0.9.1"),
            vec![TypBeschreibung::neu("VersandAuftrag").mit_tag("entitaet")],
        );

        // Beide Plugins registrieren und starten
        lager.registrieren()?;
        lager.starten()?;
        versand.registrieren()?;
        versand.starten()?;
        info!(aliase = ?self.aliase.alle(), "Alias-Tabelle nach dem Laden");

        // Das Lager-Plugin legt eine eigene Komponente unter
        // namensraum-qualifiziertem Namen ab
        let generator = NamensGenerator::neu(lager_id.als_str(), &self.config.namensraum.suffix);
        let komponenten_name = generator.qualifizieren("begruessung");
        self.speicher.einfuegen(
            komponenten_name.clone(),
            Herkunft::Plugin(lager_id.clone()),
            String::from("Willkommen im Lager"),
        )?;

        // Lookup: per Name, pro Plugin, hostweit
        let nutzer = self.nutzer();
        let begruessung = nutzer.komponente_vom_typ::<String>(&komponenten_name)?;
        info!(name = %komponenten_name, wert = %begruessung, "Komponente per Name gefunden");
        info!(
            lager = nutzer.plugin_komponenten::<String>(&lager_id)?.len(),
            gesamt = nutzer.alle_komponenten::<String>().len(),
            "Komponenten pro Bereich"
        );

        // Lager entladen: nur dessen Aliase und Komponenten verschwinden
        lager.stoppen()?;
        self.speicher.entfernen(&komponenten_name)?;
        lager.loeschen()?;
        info!(aliase = ?self.aliase.alle(), "Alias-Tabelle nach Entladen von 'lager'");

        versand.stoppen()?;
        versand.loeschen()?;
        info!(
            verbleibend = self.aliase.anzahl(),
            "Alias-Tabelle nach Entladen aller Plugins"
        );

        Ok(())
    }
}
