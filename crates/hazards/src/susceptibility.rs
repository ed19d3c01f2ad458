/// Enumerated hazard severity attached to a mapped polygon.
///
/// Codes follow the national hazard mapping convention: `LS`/`MS`/`HS`/`VHS`
/// plus `DF` (debris flow), which only occurs in landslide datasets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Susceptibility {
    Low,
    Moderate,
    High,
    VeryHigh,
    DebrisFlow,
}

impl Susceptibility {
    /// Parses a susceptibility code. Unrecognized codes return `None` so the
    /// caller can fall back to the configured missing-code paint.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "LS" => Some(Susceptibility::Low),
            "MS" => Some(Susceptibility::Moderate),
            "HS" => Some(Susceptibility::High),
            "VHS" => Some(Susceptibility::VeryHigh),
            "DF" => Some(Susceptibility::DebrisFlow),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Susceptibility::Low => "LS",
            Susceptibility::Moderate => "MS",
            Susceptibility::High => "HS",
            Susceptibility::VeryHigh => "VHS",
            Susceptibility::DebrisFlow => "DF",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            Susceptibility::Low => "Low Susceptibility",
            Susceptibility::Moderate => "Moderate Susceptibility",
            Susceptibility::High => "High Susceptibility",
            Susceptibility::VeryHigh => "Very High Susceptibility",
            Susceptibility::DebrisFlow => "Debris Flow Zone",
        }
    }
}
