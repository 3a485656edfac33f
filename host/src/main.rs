//! Steckwerk Host – Einstiegspunkt
//!
//! Laedt die Konfiguration, initialisiert das Logging und fuehrt die
//! Pipeline-Demo aus.

use anyhow::Result;
use steckwerk_host::{config::HostConfig, Host};
use steckwerk_observability::logging_initialisieren;

fn main() -> Result<()> {
    // Konfigurationsdatei-Pfad aus Umgebungsvariable oder Standard
    let config_pfad = std::env::var("STECKWERK_CONFIG")
        .unwrap_or_else(|_| "config.toml".into());

    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let config = HostConfig::laden(&config_pfad)?;

    // Logging initialisieren
    logging_initialisieren(&config.logging.level, &config.logging.format);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad,
        "Steckwerk Host wird initialisiert"
    );

    // Host aufbauen und Demo ausfuehren
    let host = Host::neu(config)?;
    host.ausfuehren()?;

    Ok(())
}
