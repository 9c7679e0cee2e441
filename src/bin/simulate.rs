use std::path::PathBuf;

use clap::Parser;

use sorrysim::{
    load_board_from_file, load_deck_from_file, run_simulation, simulation_rng, Event, EventSink,
    Game, NullSink,
};

#[derive(Debug, Parser)]
#[command(
    name = "simulate",
    about = "Unattended batch simulator for the four-color race-and-capture board game"
)]
struct Args {
    /// Board layout file: 'squares <N>' header plus '<index> <kind> <color>' records
    board: PathBuf,

    /// Deck file: card count plus '<kind> <value>' pairs
    deck: PathBuf,

    /// Number of active players; colors join in fixed order
    #[arg(long, default_value_t = 2)]
    players: usize,

    /// Rounds to simulate (the run stops earlier once a player wins)
    #[arg(long, default_value_t = 100)]
    rounds: u32,

    /// Reshuffle the deck each time the draw cursor wraps
    #[arg(long)]
    shuffle: bool,

    /// Seed for the reshuffle permutation (deterministic)
    #[arg(long, default_value_t = 0x00C0_FFEE)]
    seed: u64,

    /// Suppress per-action narration
    #[arg(long)]
    quiet: bool,

    /// Narrate as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: Event) {
        println!("{event}");
    }
}

struct JsonLinesSink;

impl EventSink for JsonLinesSink {
    fn emit(&mut self, event: Event) {
        if let Ok(line) = serde_json::to_string(&event) {
            println!("{line}");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let board = load_board_from_file(&args.board).map_err(|e| format!("board load error: {e}"))?;
    let deck = load_deck_from_file(&args.deck, args.shuffle)
        .map_err(|e| format!("deck load error: {e}"))?;
    let mut game = Game::new(board, deck, args.players, args.rounds)
        .map_err(|e| format!("configuration error: {e}"))?;

    let mut rng = simulation_rng(args.seed);
    let mut console = ConsoleSink;
    let mut json = JsonLinesSink;
    let mut null = NullSink;
    let sink: &mut dyn EventSink = if args.quiet {
        &mut null
    } else if args.json {
        &mut json
    } else {
        &mut console
    };

    let result = run_simulation(&mut game, &mut rng, sink);

    match result.winner {
        Some(winner) => println!(
            "Player {winner} wins after {} rounds",
            result.rounds_played
        ),
        None => println!("No winner after {} rounds", result.rounds_played),
    }

    Ok(())
}
