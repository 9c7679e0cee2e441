use crate::board::{Board, EndsTag};
use crate::cards::Deck;
use crate::types::{Color, PawnRef, PawnState};

pub const NUM_PAWNS: usize = 4;
pub const MAX_PLAYERS: usize = 4;

/// Where one pawn is. `square` is meaningful only while `OnBoard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnLocation {
    pub state: PawnState,
    pub square: usize,
}

impl Default for PawnLocation {
    fn default() -> Self {
        Self {
            state: PawnState::Startable,
            square: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub color: Color,
    pub pawns: [PawnLocation; NUM_PAWNS],
    pub start_square: usize,
    pub home_square: usize,
}

impl Player {
    #[inline]
    pub fn count_in(&self, state: PawnState) -> usize {
        self.pawns.iter().filter(|p| p.state == state).count()
    }

    #[inline]
    pub fn all_home(&self) -> bool {
        self.count_in(PawnState::Home) == NUM_PAWNS
    }
}

/// Candidate move produced by evaluation and consumed by application.
/// `Forfeit` is the expected no-legal-move outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Forfeit,
    /// Introduce pawn `pawn` at the player's start square.
    Start { pawn: u8 },
    /// Relocate on-board pawn `pawn` to square `to`.
    Move { pawn: u8, to: usize },
    /// Exchange squares between pawn `pawn` and an opposing on-board pawn.
    Swap { pawn: u8, victim: PawnRef },
    /// Land startable pawn `pawn` directly on `victim`'s square, capturing it.
    Sorry { pawn: u8, victim: PawnRef },
}

impl Outcome {
    #[inline]
    pub fn is_legal(&self) -> bool {
        !matches!(self, Outcome::Forfeit)
    }
}

/// Result of a whole simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Rounds actually played (may be fewer than configured on an early win).
    pub rounds_played: u32,
    pub winner: Option<Color>,
}

/// The single mutable aggregate. The turn driver owns it; evaluation reads it,
/// application mutates it, nothing else holds a reference across turns.
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub deck: Deck,
    players: [Player; MAX_PLAYERS],
    num_players: usize,
    pub rounds: u32,
}

impl Game {
    /// Builds the aggregate from a fully materialized board and deck. Derives
    /// each active color's start and home squares from the board's ends tags;
    /// a missing tag for an active color is a load error.
    pub fn new(board: Board, deck: Deck, num_players: usize, rounds: u32) -> Result<Self, String> {
        if !(1..=Color::ALL.len()).contains(&num_players) {
            return Err(format!(
                "player count must be 1..={}, got {num_players}",
                Color::ALL.len()
            ));
        }

        let mut starts: [Option<usize>; MAX_PLAYERS] = [None; MAX_PLAYERS];
        let mut homes: [Option<usize>; MAX_PLAYERS] = [None; MAX_PLAYERS];
        for idx in 0..board.num_squares() {
            match board.square(idx).ends {
                EndsTag::Start(c) => starts[c.index()] = Some(idx),
                EndsTag::Home(c) => homes[c.index()] = Some(idx),
                EndsTag::Regular => {}
            }
        }

        let make_player = |color: Color| -> Result<Player, String> {
            let i = color.index();
            let active = i < num_players;
            let start_square = match starts[i] {
                Some(sq) => sq,
                None if active => return Err(format!("board has no start square for {color}")),
                None => 0,
            };
            let home_square = match homes[i] {
                Some(sq) => sq,
                None if active => return Err(format!("board has no home square for {color}")),
                None => 0,
            };
            Ok(Player {
                color,
                pawns: [PawnLocation::default(); NUM_PAWNS],
                start_square,
                home_square,
            })
        };

        let players = [
            make_player(Color::Blue)?,
            make_player(Color::Yellow)?,
            make_player(Color::Green)?,
            make_player(Color::Red)?,
        ];

        Ok(Self {
            board,
            deck,
            players,
            num_players,
            rounds,
        })
    }

    #[inline]
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Active colors in turn order.
    #[inline]
    pub fn active_colors(&self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().take(self.num_players)
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    #[inline]
    pub fn pawn(&self, pawn_ref: PawnRef) -> PawnLocation {
        self.players[pawn_ref.color.index()].pawns[pawn_ref.pawn as usize]
    }

    /// First active color with all four pawns home, if any.
    pub fn winner(&self) -> Option<Color> {
        self.active_colors().find(|&c| self.player(c).all_home())
    }
}
