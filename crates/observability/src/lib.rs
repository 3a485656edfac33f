//! # steckwerk-observability
//!
//! Observability-Crate fuer Steckwerk:
//! - Structured Logging via tracing-subscriber (Text oder JSON)
//! - Konfiguration per Umgebungsvariablen `SW_LOG_LEVEL` / `SW_LOG_FORMAT`

pub mod logging;

pub use logging::logging_initialisieren;
