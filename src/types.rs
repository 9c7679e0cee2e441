use serde::{Deserialize, Serialize};

/// Player colors, in turn order. At most four players; a game with fewer
/// activates a prefix of this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Yellow,
    Green,
    Red,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Green, Color::Red];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Blue => 0,
            Color::Yellow => 1,
            Color::Green => 2,
            Color::Red => 3,
        }
    }

    #[inline]
    pub fn from_index(idx: usize) -> Option<Color> {
        Color::ALL.get(idx).copied()
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown color '{s}'"))
    }
}

/// Reference to one specific pawn: a square occupant, or a move victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PawnRef {
    pub color: Color,
    pub pawn: u8,
}

/// Pawn lifecycle. `Home` is terminal; no card ever moves a home pawn again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PawnState {
    Startable,
    OnBoard,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Start,
    Forward,
    Backward,
    Swap,
    Sorry,
}

impl CardKind {
    pub const ALL: [CardKind; 5] = [
        CardKind::Start,
        CardKind::Forward,
        CardKind::Backward,
        CardKind::Swap,
        CardKind::Sorry,
    ];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            CardKind::Start => "start",
            CardKind::Forward => "forward",
            CardKind::Backward => "backward",
            CardKind::Swap => "swap",
            CardKind::Sorry => "sorry",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| format!("unknown card kind '{s}'"))
    }
}
