use serde::Serialize;

use crate::cards::Card;
use crate::types::{Color, PawnRef};

/// One narrated action. The exact wording of `Display` is informational; the
/// event set and the fields it exposes are the contract tests rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    RoundStarted {
        round: u32,
    },
    CardDrawn {
        color: Color,
        card: Card,
    },
    TurnForfeited {
        color: Color,
    },
    PawnStarted {
        color: Color,
        pawn: u8,
        square: usize,
    },
    PawnMoved {
        color: Color,
        pawn: u8,
        from: usize,
        to: usize,
    },
    PawnsSwapped {
        color: Color,
        pawn: u8,
        victim: PawnRef,
    },
    SorryPlayed {
        color: Color,
        pawn: u8,
        victim: PawnRef,
        square: usize,
    },
    PawnBumped {
        by: PawnRef,
        victim: PawnRef,
        square: usize,
    },
    PawnSlid {
        color: Color,
        pawn: u8,
        from: usize,
        to: usize,
    },
    PawnHome {
        color: Color,
        pawn: u8,
    },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Event::RoundStarted { round } => write!(f, "Round {round}"),
            Event::CardDrawn { color, card } => write!(f, "Player {color} draws {card}"),
            Event::TurnForfeited { color } => write!(f, "Player {color} forfeits the turn"),
            Event::PawnStarted {
                color,
                pawn,
                square,
            } => write!(f, "{color} pawn {pawn} starts at square {square}"),
            Event::PawnMoved {
                color,
                pawn,
                from,
                to,
            } => write!(f, "{color} pawn {pawn} moves from square {from} to square {to}"),
            Event::PawnsSwapped {
                color,
                pawn,
                victim,
            } => write!(
                f,
                "{color} pawn {pawn} swaps with {} pawn {}",
                victim.color, victim.pawn
            ),
            Event::SorryPlayed {
                color,
                pawn,
                victim,
                square,
            } => write!(
                f,
                "{color} pawn {pawn} plays sorry on {} pawn {} at square {square}",
                victim.color, victim.pawn
            ),
            Event::PawnBumped { by, victim, square } => write!(
                f,
                "{} pawn {} bumps {} pawn {} off square {square}",
                by.color, by.pawn, victim.color, victim.pawn
            ),
            Event::PawnSlid {
                color,
                pawn,
                from,
                to,
            } => write!(f, "{color} pawn {pawn} slides from square {from} to square {to}"),
            Event::PawnHome { color, pawn } => {
                write!(f, "{color} pawn {pawn} has reached home")
            }
        }
    }
}

/// Consumer of narrated actions. The driver and the application engine push
/// every applied effect through one sink.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Discards everything; for callers that only want the final result.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: Event) {}
}

/// Collects events in order; the test-facing sink.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for Recorder {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}
