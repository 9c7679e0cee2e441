use std::fs;
use std::path::Path;

use crate::board::{Board, EndsTag, SlideTag};
use crate::cards::{Card, Deck};
use crate::types::{CardKind, Color};

/// Parses a board description: a `squares <N>` header followed by unordered
/// `<index> <kind> <color>` records until end of input. Undeclared squares
/// stay regular and unoccupied.
pub fn parse_board(text: &str) -> Result<Board, String> {
    let mut tokens = text.split_whitespace();

    match tokens.next() {
        Some("squares") => {}
        other => return Err(format!("expected 'squares' header, got {other:?}")),
    }
    let count: usize = tokens
        .next()
        .ok_or("missing square count")?
        .parse()
        .map_err(|e| format!("bad square count: {e}"))?;
    if count == 0 {
        return Err("board must have at least one square".to_string());
    }

    let mut board = Board::new(count);
    while let Some(idx_tok) = tokens.next() {
        let kind = tokens.next().ok_or("square record missing kind")?;
        let color_tok = tokens.next().ok_or("square record missing color")?;

        let idx: usize = idx_tok
            .parse()
            .map_err(|e| format!("bad square index '{idx_tok}': {e}"))?;
        if idx >= count {
            return Err(format!("square index {idx} out of range 0..{count}"));
        }
        let color: Color = color_tok.parse()?;

        let square = board.square_mut(idx);
        match kind {
            "begin" => square.slide = SlideTag::Begin(color),
            "end" => square.slide = SlideTag::End(color),
            "home" => square.ends = EndsTag::Home(color),
            "start" => square.ends = EndsTag::Start(color),
            other => return Err(format!("unknown square kind '{other}'")),
        }
    }

    Ok(board)
}

/// Parses a deck description: a card count followed by that many
/// `<kind> <value>` pairs. The value token is present for every card but only
/// meaningful for forward/backward.
pub fn parse_deck(text: &str, shuffle_on_wrap: bool) -> Result<Deck, String> {
    let mut tokens = text.split_whitespace();

    let count: usize = tokens
        .next()
        .ok_or("missing card count")?
        .parse()
        .map_err(|e| format!("bad card count: {e}"))?;

    let mut cards = Vec::with_capacity(count);
    for i in 0..count {
        let kind_tok = tokens.next().ok_or_else(|| format!("card {i} missing kind"))?;
        let value_tok = tokens.next().ok_or_else(|| format!("card {i} missing value"))?;
        let kind: CardKind = kind_tok.parse()?;
        let value: u8 = value_tok
            .parse()
            .map_err(|e| format!("bad value '{value_tok}' for card {i}: {e}"))?;
        cards.push(Card { kind, value });
    }

    Deck::new(cards, shuffle_on_wrap)
}

pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board, String> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("failed to read board file: {e}"))?;
    parse_board(&text)
}

pub fn load_deck_from_file<P: AsRef<Path>>(path: P, shuffle_on_wrap: bool) -> Result<Deck, String> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("failed to read deck file: {e}"))?;
    parse_deck(&text, shuffle_on_wrap)
}
