use crate::board::{EndsTag, SlideTag};
use crate::events::{Event, EventSink};
use crate::state::{Game, Outcome};
use crate::types::{Color, PawnRef, PawnState};

/// Applies an accepted outcome to the game state, emitting one event per
/// effect. `Forfeit` is a no-op; the driver narrates it separately.
pub fn apply(game: &mut Game, mover_color: Color, outcome: Outcome, sink: &mut dyn EventSink) {
    match outcome {
        Outcome::Forfeit => {}
        Outcome::Start { pawn } => {
            let mover = PawnRef {
                color: mover_color,
                pawn,
            };
            let square = game.player(mover_color).start_square;
            sink.emit(Event::PawnStarted {
                color: mover_color,
                pawn,
                square,
            });
            land(game, mover, square, sink);
        }
        Outcome::Move { pawn, to } => {
            let mover = PawnRef {
                color: mover_color,
                pawn,
            };
            let from = game.pawn(mover).square;
            // Departure square is vacated before the landing resolves; start
            // and sorry movers come from off the board, swap rewrites both
            // squares itself.
            game.board.set_occupant(from, None);
            sink.emit(Event::PawnMoved {
                color: mover_color,
                pawn,
                from,
                to,
            });
            land(game, mover, to, sink);
        }
        Outcome::Sorry { pawn, victim } => {
            let mover = PawnRef {
                color: mover_color,
                pawn,
            };
            let square = game.pawn(victim).square;
            sink.emit(Event::SorryPlayed {
                color: mover_color,
                pawn,
                victim,
                square,
            });
            land(game, mover, square, sink);
        }
        Outcome::Swap { pawn, victim } => {
            let mover = PawnRef {
                color: mover_color,
                pawn,
            };
            sink.emit(Event::PawnsSwapped {
                color: mover_color,
                pawn,
                victim,
            });
            swap(game, mover, victim, sink);
        }
    }
}

/// Capture at `square`: any occupant of any color is sent back to startable
/// and the square is cleared.
fn bump(game: &mut Game, by: PawnRef, square: usize, sink: &mut dyn EventSink) {
    if let Some(victim) = game.board.occupant(square) {
        game.player_mut(victim.color).pawns[victim.pawn as usize].state = PawnState::Startable;
        game.board.set_occupant(square, None);
        sink.emit(Event::PawnBumped { by, victim, square });
    }
}

/// Common landing path for start, forward/backward, and sorry: capture the
/// destination occupant, place the mover, then resolve home/slide effects.
fn land(game: &mut Game, mover: PawnRef, square: usize, sink: &mut dyn EventSink) {
    bump(game, mover, square, sink);
    let loc = &mut game.player_mut(mover.color).pawns[mover.pawn as usize];
    loc.state = PawnState::OnBoard;
    loc.square = square;
    game.board.set_occupant(square, Some(mover));
    settle(game, mover, sink);
}

/// Square exchange between two on-board pawns, then independent home/slide
/// resolution for each side on its new square. The victim's resolution is
/// skipped if the mover's slide bumped it off the board first.
fn swap(game: &mut Game, mover: PawnRef, victim: PawnRef, sink: &mut dyn EventSink) {
    let mover_sq = game.pawn(mover).square;
    let victim_sq = game.pawn(victim).square;

    game.player_mut(mover.color).pawns[mover.pawn as usize].square = victim_sq;
    game.player_mut(victim.color).pawns[victim.pawn as usize].square = mover_sq;
    game.board.set_occupant(victim_sq, Some(mover));
    game.board.set_occupant(mover_sq, Some(victim));

    settle(game, mover, sink);
    if game.pawn(victim).state == PawnState::OnBoard {
        settle(game, victim, sink);
    }
}

/// Post-landing resolution at the mover's current square. Home takes
/// precedence over a slide when the square carries both tags; otherwise a
/// foreign begin-slide sweeps the mover to the end square, capturing every
/// occupant in the range, and home is re-checked at the resting square.
fn settle(game: &mut Game, mover: PawnRef, sink: &mut dyn EventSink) {
    let square = game.pawn(mover).square;

    if game.board.square(square).ends == EndsTag::Home(mover.color) {
        reach_home(game, mover, sink);
        return;
    }

    let slides = matches!(game.board.square(square).slide,
        SlideTag::Begin(c) if c != mover.color);
    if !slides {
        return;
    }

    // The mover is in transit during the sweep so it cannot bump itself.
    game.board.set_occupant(square, None);
    let mut rest = square;
    for _ in 0..game.board.num_squares() {
        bump(game, mover, rest, sink);
        if matches!(game.board.square(rest).slide, SlideTag::End(_)) {
            break;
        }
        rest = game.board.step_forward(rest);
    }

    game.player_mut(mover.color).pawns[mover.pawn as usize].square = rest;
    game.board.set_occupant(rest, Some(mover));
    sink.emit(Event::PawnSlid {
        color: mover.color,
        pawn: mover.pawn,
        from: square,
        to: rest,
    });

    if game.board.square(rest).ends == EndsTag::Home(mover.color) {
        reach_home(game, mover, sink);
    }
}

/// Home is terminal: the pawn leaves the track, so its square is vacated and
/// later pawns of the same color can finish there too.
fn reach_home(game: &mut Game, mover: PawnRef, sink: &mut dyn EventSink) {
    let square = game.pawn(mover).square;
    game.player_mut(mover.color).pawns[mover.pawn as usize].state = PawnState::Home;
    game.board.set_occupant(square, None);
    sink.emit(Event::PawnHome {
        color: mover.color,
        pawn: mover.pawn,
    });
}
