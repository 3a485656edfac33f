//! Ordnungs-Prioritaeten fuer Pipeline-Stufen
//!
//! Kleinere Werte laufen frueher. Stufen mit gleichem Wert behalten die
//! Reihenfolge ihrer Entdeckung – die Aggregation sortiert stabil.

/// Prioritaet einer Pipeline-Stufe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrdnungsPrioritaet {
    wert: i32,
}

impl OrdnungsPrioritaet {
    const HOCH: i32 = 100;
    const MITTEL: i32 = 500;
    const NIEDRIG: i32 = 900;

    /// Hohe Prioritaet – laeuft vor mittel und niedrig
    pub fn hoch() -> Self {
        Self { wert: Self::HOCH }
    }

    /// Mittlere Prioritaet – Standard fuer die meisten Stufen
    pub fn mittel() -> Self {
        Self { wert: Self::MITTEL }
    }

    /// Niedrige Prioritaet – laeuft zuletzt
    pub fn niedrig() -> Self {
        Self {
            wert: Self::NIEDRIG,
        }
    }

    /// Verschiebt die Prioritaet um einen Versatz (negativ = frueher)
    pub fn mit_versatz(self, versatz: i32) -> Self {
        Self {
            wert: self.wert + versatz,
        }
    }

    /// Gibt den numerischen Wert zurueck
    pub fn wert(&self) -> i32 {
        self.wert
    }
}

impl Default for OrdnungsPrioritaet {
    fn default() -> Self {
        Self::mittel()
    }
}
