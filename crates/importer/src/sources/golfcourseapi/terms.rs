use crate::ImporterError;

/// The fixed search terms an import walks through, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTerm {
    PebbleBeach,
    Augusta,
    StAndrews,
    Pinehurst,
    Bethpage,
    TorreyPines,
    WhistlingStraits,
    Oakmont,
    Muirfield,
    RoyalMelbourne,
    TpcSawgrass,
    KiawahIsland,
}

impl SearchTerm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PebbleBeach => "Pebble Beach",
            Self::Augusta => "Augusta",
            Self::StAndrews => "St Andrews",
            Self::Pinehurst => "Pinehurst",
            Self::Bethpage => "Bethpage",
            Self::TorreyPines => "Torrey Pines",
            Self::WhistlingStraits => "Whistling Straits",
            Self::Oakmont => "Oakmont",
            Self::Muirfield => "Muirfield",
            Self::RoyalMelbourne => "Royal Melbourne",
            Self::TpcSawgrass => "TPC Sawgrass",
            Self::KiawahIsland => "Kiawah Island",
        }
    }

    pub fn all() -> &'static [SearchTerm] {
        &[
            Self::PebbleBeach,
            Self::Augusta,
            Self::StAndrews,
            Self::Pinehurst,
            Self::Bethpage,
            Self::TorreyPines,
            Self::WhistlingStraits,
            Self::Oakmont,
            Self::Muirfield,
            Self::RoyalMelbourne,
            Self::TpcSawgrass,
            Self::KiawahIsland,
        ]
    }

    fn parse_str(s: &str) -> Result<Self, ImporterError> {
        let wanted = normalize(s);
        Self::all()
            .iter()
            .copied()
            .find(|term| normalize(term.as_str()) == wanted)
            .ok_or_else(|| {
                ImporterError::ConfigError(format!(
                    "Unknown search term: '{}'. Available: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// Lowercase and drop separators so "st-andrews", "St Andrews" and
/// "st_andrews" all compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl TryFrom<&str> for SearchTerm {
    type Error = ImporterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for SearchTerm {
    type Err = ImporterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
