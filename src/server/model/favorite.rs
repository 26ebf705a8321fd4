use std::fmt;

/// The kind of record a favorite link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteKind {
    Planet,
    Character,
    Vehicle,
}

impl FavoriteKind {
    /// Capitalized name used in API messages, e.g. `Planet is already a favorite`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::Character => "Character",
            Self::Vehicle => "Vehicle",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planet => write!(f, "planet"),
            Self::Character => write!(f, "character"),
            Self::Vehicle => write!(f, "vehicle"),
        }
    }
}
