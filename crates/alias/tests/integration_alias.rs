//! Integration-Tests fuer die Alias-Erweiterung am kompletten Pipeline-Aufbau

use std::collections::HashMap;
use std::sync::Arc;

use steckwerk_alias::{AliasErweiterung, AliasRegistry, RESSOURCEN_NAME};
use steckwerk_core::{PluginId, PluginMeta, TypBeschreibung};
use steckwerk_pipeline::{
    ErweiterungsFehler, ErweiterungsProvider, Herkunft, HostKontext, KomponentenSpeicher,
    LeererHaken, PipelineRegistry, PluginController, PluginHaken,
};

struct Aufbau {
    registry: Arc<PipelineRegistry>,
    speicher: Arc<KomponentenSpeicher>,
    aliase: Arc<AliasRegistry>,
}

fn aufbauen(explizite_aliase: HashMap<String, String>) -> Aufbau {
    let speicher = Arc::new(KomponentenSpeicher::neu());
    let aliase = Arc::new(AliasRegistry::neu());
    speicher
        .einfuegen_geteilt(RESSOURCEN_NAME, Herkunft::Host, Arc::clone(&aliase))
        .unwrap();

    let registry = Arc::new(PipelineRegistry::neu());
    let provider: Vec<Box<dyn ErweiterungsProvider>> =
        vec![Box::new(AliasErweiterung::mit_aliasen(explizite_aliase))];
    registry
        .aggregieren(&provider, &HostKontext::neu(Arc::clone(&speicher)))
        .unwrap();

    Aufbau {
        registry,
        speicher,
        aliase,
    }
}

fn plugin_mit_typen(
    aufbau: &Aufbau,
    id: &str,
    typen: Vec<TypBeschreibung>,
    haken: Box<dyn PluginHaken>,
) -> PluginController {
    let meta = PluginMeta::neu(PluginId::neu(id), id, "1.0.0");
    PluginController::neu(
        meta,
        typen,
        Arc::clone(&aufbau.registry),
        Arc::clone(&aufbau.speicher),
        haken,
    )
}

#[test]
fn zwei_plugins_teilen_eine_registry() {
    let aufbau = aufbauen(HashMap::new());

    let mut a = plugin_mit_typen(
        &aufbau,
        "plugin-a",
        vec![TypBeschreibung::neu("Foo").mit_tag("entitaet")],
        Box::new(LeererHaken),
    );
    let mut b = plugin_mit_typen(
        &aufbau,
        "plugin-b",
        vec![TypBeschreibung::neu("Bar").mit_tag("entitaet")],
        Box::new(LeererHaken),
    );

    a.registrieren().unwrap();
    a.starten().unwrap();
    b.registrieren().unwrap();
    b.starten().unwrap();

    // Beide Aliase sind eingetragen
    assert!(aufbau.aliase.enthaelt("foo"));
    assert!(aufbau.aliase.enthaelt("bar"));
    assert_eq!(aufbau.aliase.anzahl(), 2);

    // A entlaedt: nur "foo" verschwindet
    a.stoppen().unwrap();
    assert!(!aufbau.aliase.enthaelt("foo"));
    assert!(aufbau.aliase.enthaelt("bar"));

    // B entlaedt: Tabelle ist leer
    b.stoppen().unwrap();
    assert!(aufbau.aliase.ist_leer());
}

#[test]
fn verschachtelte_zyklen_lassen_fremde_eintraege_unberuehrt() {
    let aufbau = aufbauen(HashMap::new());

    let mut a = plugin_mit_typen(
        &aufbau,
        "plugin-a",
        vec![TypBeschreibung::neu("Foo").mit_tag("entitaet")],
        Box::new(LeererHaken),
    );
    let mut b = plugin_mit_typen(
        &aufbau,
        "plugin-b",
        vec![TypBeschreibung::neu("Bar").mit_tag("entitaet")],
        Box::new(LeererHaken),
    );

    // A laedt, B laedt, A entlaedt und laedt erneut, B entlaedt
    a.registrieren().unwrap();
    a.starten().unwrap();
    b.registrieren().unwrap();
    b.starten().unwrap();
    a.stoppen().unwrap();
    assert_eq!(aufbau.aliase.alle(), vec![("bar".into(), "Bar".into())]);

    a.registrieren().unwrap();
    a.starten().unwrap();
    assert_eq!(aufbau.aliase.anzahl(), 2);

    b.stoppen().unwrap();
    assert_eq!(aufbau.aliase.alle(), vec![("foo".into(), "Foo".into())]);

    a.stoppen().unwrap();
    assert!(aufbau.aliase.ist_leer());
}

#[test]
fn haken_absturz_leckt_keine_aliase() {
    struct AbsturzHaken;

    impl PluginHaken for AbsturzHaken {
        fn beim_stopp(&self) -> anyhow::Result<()> {
            anyhow::bail!("Plugin-Code kaputt")
        }
    }

    let aufbau = aufbauen(HashMap::new());
    let mut plugin = plugin_mit_typen(
        &aufbau,
        "wackelig",
        vec![TypBeschreibung::neu("Foo").mit_tag("entitaet")],
        Box::new(AbsturzHaken),
    );

    plugin.registrieren().unwrap();
    plugin.starten().unwrap();
    assert!(aufbau.aliase.enthaelt("foo"));

    // Der Stopp-Haken stuerzt ab – die Aliase verschwinden trotzdem
    plugin.stoppen().unwrap();
    assert!(aufbau.aliase.ist_leer());
}

#[test]
fn alias_vorrang_explizit_vor_attribut_vor_standard() {
    let mut explizit = HashMap::new();
    explizit.insert("Foo".to_string(), "zugeordnet".to_string());
    let aufbau = aufbauen(explizit);

    let mut plugin = plugin_mit_typen(
        &aufbau,
        "vorrang",
        vec![
            // Explizite Zuordnung gewinnt
            TypBeschreibung::neu("Foo")
                .mit_tag("entitaet")
                .mit_attribut("alias", "attributiert"),
            // Attribut gewinnt vor Standard
            TypBeschreibung::neu("Bar")
                .mit_tag("entitaet")
                .mit_attribut("alias", "balken"),
            // Standard-Ableitung
            TypBeschreibung::neu("Baz").mit_tag("entitaet"),
        ],
        Box::new(LeererHaken),
    );

    plugin.registrieren().unwrap();
    plugin.starten().unwrap();

    assert_eq!(
        aufbau.aliase.alle(),
        vec![
            ("balken".into(), "Bar".into()),
            ("baz".into(), "Baz".into()),
            ("zugeordnet".into(), "Foo".into()),
        ]
    );

    plugin.stoppen().unwrap();
    assert!(aufbau.aliase.ist_leer());
}

#[test]
fn loeschen_ohne_stopp_raeumt_auf() {
    let aufbau = aufbauen(HashMap::new());
    let mut plugin = plugin_mit_typen(
        &aufbau,
        "kurzlebig",
        vec![TypBeschreibung::neu("Foo").mit_tag("entitaet")],
        Box::new(LeererHaken),
    );

    plugin.registrieren().unwrap();
    plugin.starten().unwrap();
    assert_eq!(aufbau.aliase.anzahl(), 1);

    // Direktes Loeschen aus dem gestarteten Zustand
    plugin.loeschen().unwrap();
    assert!(aufbau.aliase.ist_leer());
}

#[test]
fn zweite_aggregation_fehlschlaegt() {
    let aufbau = aufbauen(HashMap::new());

    let nochmal: Vec<Box<dyn ErweiterungsProvider>> = vec![Box::new(AliasErweiterung::neu())];
    let err = aufbau
        .registry
        .aggregieren(&nochmal, &HostKontext::neu(Arc::clone(&aufbau.speicher)))
        .unwrap_err();
    assert!(matches!(err, ErweiterungsFehler::BereitsInitialisiert));

    // Bestand unveraendert: genau ein Pipe-Verarbeiter, eine Klassen-Gruppe
    assert_eq!(aufbau.registry.pipe_verarbeiter().len(), 1);
    assert_eq!(aufbau.registry.klassen_gruppen().len(), 1);
}

#[test]
fn fehlende_registry_degradiert_zum_leerlauf() {
    // Host ohne Alias-Registry
    let speicher = Arc::new(KomponentenSpeicher::neu());
    let registry = Arc::new(PipelineRegistry::neu());
    let provider: Vec<Box<dyn ErweiterungsProvider>> = vec![Box::new(AliasErweiterung::neu())];
    registry
        .aggregieren(&provider, &HostKontext::neu(Arc::clone(&speicher)))
        .unwrap();

    let meta = PluginMeta::neu(PluginId::neu("leerlauf"), "leerlauf", "1.0.0");
    let mut plugin = PluginController::neu(
        meta,
        vec![TypBeschreibung::neu("Foo").mit_tag("entitaet")],
        Arc::clone(&registry),
        Arc::clone(&speicher),
        Box::new(LeererHaken),
    );

    // Registrierung und Stopp laufen als dokumentierte Leerlaeufe durch
    plugin.registrieren().unwrap();
    plugin.starten().unwrap();
    plugin.stoppen().unwrap();
}
