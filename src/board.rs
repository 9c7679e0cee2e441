use crate::types::{Color, PawnRef};

/// Slide-zone tagging. `Begin`/`End` squares delimit a colored zone; landing
/// on `Begin` from a different color sweeps the pawn to the matching `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideTag {
    Regular,
    Begin(Color),
    End(Color),
}

/// Per-color fixed-square tagging, independent of the slide tag. A square may
/// be `Home` for one color and a slide `Begin` for another at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndsTag {
    Regular,
    Home(Color),
    Start(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub slide: SlideTag,
    pub ends: EndsTag,
    pub occupant: Option<PawnRef>,
}

impl Default for Square {
    fn default() -> Self {
        Self {
            slide: SlideTag::Regular,
            ends: EndsTag::Regular,
            occupant: None,
        }
    }
}

/// Circular track of N squares. Pure storage plus the distance query; all
/// legality logic lives in the engine.
#[derive(Debug, Clone)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    pub fn new(num_squares: usize) -> Self {
        Self {
            squares: vec![Square::default(); num_squares],
        }
    }

    #[inline]
    pub fn num_squares(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub fn square(&self, idx: usize) -> &Square {
        &self.squares[idx]
    }

    #[inline]
    pub fn square_mut(&mut self, idx: usize) -> &mut Square {
        &mut self.squares[idx]
    }

    #[inline]
    pub fn occupant(&self, idx: usize) -> Option<PawnRef> {
        self.squares[idx].occupant
    }

    #[inline]
    pub fn set_occupant(&mut self, idx: usize, occupant: Option<PawnRef>) {
        self.squares[idx].occupant = occupant;
    }

    /// Next square walking forward, wrapping at the end of the track.
    #[inline]
    pub fn step_forward(&self, idx: usize) -> usize {
        (idx + 1) % self.squares.len()
    }

    /// Destination of a signed move from `idx`, wrapping in both directions.
    #[inline]
    pub fn offset(&self, idx: usize, value: i32) -> usize {
        let n = self.squares.len() as i32;
        (idx as i32 + value).rem_euclid(n) as usize
    }

    /// Forward circular distance from `from` to `to`. The wrap branch uses the
    /// track's documented `N - 1 - from + to` term, not `N - from + to`.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> usize {
        if to >= from {
            to - from
        } else {
            self.squares.len() - 1 - from + to
        }
    }
}
