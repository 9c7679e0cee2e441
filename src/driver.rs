use rand::Rng;

use crate::engine::apply::apply;
use crate::engine::eval::evaluate;
use crate::events::{Event, EventSink};
use crate::state::{Game, GameResult};
use crate::types::Color;

/// Runs the configured number of rounds. Each active color in turn order
/// draws the current card, evaluates it, applies the outcome if legal (a
/// forfeited turn is a no-op), and advances the deck. Stops early as soon as
/// a full round ends with some player having all four pawns home.
pub fn run_simulation<R: Rng + ?Sized>(
    game: &mut Game,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> GameResult {
    let num_players = game.num_players();
    let mut rounds_played = 0;

    for round in 1..=game.rounds {
        sink.emit(Event::RoundStarted { round });
        for color in Color::ALL.into_iter().take(num_players) {
            let card = game.deck.current();
            sink.emit(Event::CardDrawn { color, card });

            let outcome = evaluate(game, color);
            if outcome.is_legal() {
                apply(game, color, outcome, sink);
            } else {
                sink.emit(Event::TurnForfeited { color });
            }
            game.deck.advance(rng);
        }

        rounds_played = round;
        if let Some(winner) = game.winner() {
            return GameResult {
                rounds_played,
                winner: Some(winner),
            };
        }
    }

    GameResult {
        rounds_played,
        winner: None,
    }
}
