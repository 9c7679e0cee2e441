use crate::state::{Game, Outcome, Player, NUM_PAWNS};
use crate::types::{CardKind, Color, PawnRef, PawnState};

/// Evaluates the deck's current card for `color` against the current state.
/// Pure: never mutates; a turn with no eligible move is `Outcome::Forfeit`.
pub fn evaluate(game: &Game, color: Color) -> Outcome {
    let card = game.deck.current();
    match card.kind {
        CardKind::Start => eval_start(game, color),
        CardKind::Forward => eval_step(game, color, i32::from(card.value)),
        CardKind::Backward => eval_step(game, color, -i32::from(card.value)),
        CardKind::Swap => eval_swap(game, color),
        CardKind::Sorry => eval_sorry(game, color),
    }
}

fn occupied_by_own(game: &Game, color: Color, square: usize) -> bool {
    game.board
        .occupant(square)
        .map_or(false, |occ| occ.color == color)
}

/// Start: the lowest-index startable pawn enters at the start square, unless
/// that square already holds one of the player's own pawns.
fn eval_start(game: &Game, color: Color) -> Outcome {
    let player = game.player(color);
    if occupied_by_own(game, color, player.start_square) {
        return Outcome::Forfeit;
    }
    match first_startable(player) {
        Some(pawn) => Outcome::Start { pawn },
        None => Outcome::Forfeit,
    }
}

/// Forward/backward relocation by a signed step count. A pawn is eligible if
/// it is on board, a forward step does not overshoot its home square, and the
/// destination is free of its own color. Backward steps may walk past home.
/// Of the eligible pawns the one furthest from home moves; ties go to the
/// lower pawn index.
fn eval_step(game: &Game, color: Color, value: i32) -> Outcome {
    let player = game.player(color);
    let mut best: Option<(usize, u8, usize)> = None; // (distance, pawn, dest)

    for (i, loc) in player.pawns.iter().enumerate() {
        if loc.state != PawnState::OnBoard {
            continue;
        }
        let dist = game.board.distance(loc.square, player.home_square);
        if value > 0 && value as usize > dist {
            continue;
        }
        let dest = game.board.offset(loc.square, value);
        if occupied_by_own(game, color, dest) {
            continue;
        }
        if best.map_or(true, |(d, _, _)| dist > d) {
            best = Some((dist, i as u8, dest));
        }
    }

    match best {
        Some((_, pawn, to)) => Outcome::Move { pawn, to },
        None => Outcome::Forfeit,
    }
}

/// Swap: the player's on-board pawn furthest from home exchanges squares with
/// the opposing on-board pawn closest to the player's home square.
fn eval_swap(game: &Game, color: Color) -> Outcome {
    let player = game.player(color);
    let Some(pawn) = furthest_from_home(game, player) else {
        return Outcome::Forfeit;
    };
    match closest_opposing(game, color) {
        Some(victim) => Outcome::Swap { pawn, victim },
        None => Outcome::Forfeit,
    }
}

/// Sorry: a startable pawn lands directly on the opposing on-board pawn
/// closest to the player's home square, capturing it.
fn eval_sorry(game: &Game, color: Color) -> Outcome {
    let player = game.player(color);
    let Some(pawn) = first_startable(player) else {
        return Outcome::Forfeit;
    };
    match closest_opposing(game, color) {
        Some(victim) => Outcome::Sorry { pawn, victim },
        None => Outcome::Forfeit,
    }
}

fn first_startable(player: &Player) -> Option<u8> {
    (0..NUM_PAWNS as u8).find(|&i| player.pawns[i as usize].state == PawnState::Startable)
}

fn furthest_from_home(game: &Game, player: &Player) -> Option<u8> {
    let mut best: Option<(usize, u8)> = None;
    for (i, loc) in player.pawns.iter().enumerate() {
        if loc.state != PawnState::OnBoard {
            continue;
        }
        let dist = game.board.distance(loc.square, player.home_square);
        if best.map_or(true, |(d, _)| dist > d) {
            best = Some((dist, i as u8));
        }
    }
    best.map(|(_, pawn)| pawn)
}

/// Opposing on-board pawn with the smallest distance to the acting player's
/// home square; ties go to the earlier color, then the lower pawn index.
fn closest_opposing(game: &Game, color: Color) -> Option<PawnRef> {
    let home = game.player(color).home_square;
    let mut best: Option<(usize, PawnRef)> = None;
    for other in game.active_colors().filter(|&c| c != color) {
        for (i, loc) in game.player(other).pawns.iter().enumerate() {
            if loc.state != PawnState::OnBoard {
                continue;
            }
            let dist = game.board.distance(loc.square, home);
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((
                    dist,
                    PawnRef {
                        color: other,
                        pawn: i as u8,
                    },
                ));
            }
        }
    }
    best.map(|(_, victim)| victim)
}
