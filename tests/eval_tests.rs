use sorrysim::{
    evaluate, parse_board, Card, CardKind, Color, Deck, Game, Outcome, PawnRef, PawnState,
};

const BOARD: &str = "\
squares 60
4 start blue
10 home blue
34 start yellow
40 home yellow
19 start green
28 home green
49 start red
55 home red
20 begin red
25 end red
";

fn card(kind: CardKind, value: u8) -> Card {
    Card { kind, value }
}

fn game_with(players: usize, drawn: Card) -> Game {
    let board = parse_board(BOARD).expect("test board parses");
    let deck = Deck::new(vec![drawn], false).unwrap();
    Game::new(board, deck, players, 1).unwrap()
}

fn place(game: &mut Game, color: Color, pawn: u8, square: usize) {
    let loc = &mut game.player_mut(color).pawns[pawn as usize];
    loc.state = PawnState::OnBoard;
    loc.square = square;
    game.board.set_occupant(square, Some(PawnRef { color, pawn }));
}

#[test]
fn start_selects_lowest_index_startable_pawn() {
    let mut game = game_with(2, card(CardKind::Start, 0));
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Start { pawn: 0 });

    place(&mut game, Color::Blue, 0, 30);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Start { pawn: 1 });
}

#[test]
fn start_blocked_by_own_pawn_on_start_square() {
    let mut game = game_with(2, card(CardKind::Start, 0));
    place(&mut game, Color::Blue, 0, 4);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}

#[test]
fn start_onto_opposing_pawn_is_legal() {
    let mut game = game_with(2, card(CardKind::Start, 0));
    place(&mut game, Color::Yellow, 0, 4);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Start { pawn: 0 });
}

#[test]
fn start_with_no_startable_pawn_forfeits() {
    let mut game = game_with(2, card(CardKind::Start, 0));
    for pawn in 0..4 {
        place(&mut game, Color::Blue, pawn, 30 + usize::from(pawn));
    }
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}

#[test]
fn forward_overshooting_home_forfeits() {
    // Home at 10, pawn at 8 (distance 2), forward 5, no other eligible pawn.
    let mut game = game_with(2, card(CardKind::Forward, 5));
    place(&mut game, Color::Blue, 0, 8);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}

#[test]
fn forward_moves_furthest_pawn_from_home() {
    let mut game = game_with(2, card(CardKind::Forward, 3));
    place(&mut game, Color::Blue, 0, 6); // distance 4 to home 10
    place(&mut game, Color::Blue, 1, 20); // distance 49
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Move { pawn: 1, to: 23 });
}

#[test]
fn forward_skips_pawn_whose_destination_holds_own_color() {
    let mut game = game_with(2, card(CardKind::Forward, 3));
    place(&mut game, Color::Blue, 0, 20); // furthest, but 23 is occupied by own
    place(&mut game, Color::Blue, 1, 23);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Move { pawn: 1, to: 26 });
}

#[test]
fn own_pawn_may_move_into_a_square_vacated_this_game() {
    let mut game = game_with(2, card(CardKind::Forward, 3));
    place(&mut game, Color::Blue, 0, 20);
    place(&mut game, Color::Blue, 1, 23);
    // Pawn 1 steps off 23; the vacated square must be a legal destination
    // for pawn 0 afterwards.
    sorrysim::apply(
        &mut game,
        Color::Blue,
        sorrysim::Outcome::Move { pawn: 1, to: 26 },
        &mut sorrysim::NullSink,
    );
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Move { pawn: 0, to: 23 });
}

#[test]
fn forward_may_land_on_opposing_pawn() {
    let mut game = game_with(2, card(CardKind::Forward, 3));
    place(&mut game, Color::Blue, 0, 20);
    place(&mut game, Color::Yellow, 0, 23);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Move { pawn: 0, to: 23 });
}

#[test]
fn backward_may_walk_past_home() {
    // Distance to home is 2, value 5: backward is exempt from the overshoot rule.
    let mut game = game_with(2, card(CardKind::Backward, 5));
    place(&mut game, Color::Blue, 0, 8);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Move { pawn: 0, to: 3 });
}

#[test]
fn step_cards_ignore_startable_and_home_pawns() {
    let mut game = game_with(2, card(CardKind::Forward, 3));
    game.player_mut(Color::Blue).pawns[0].state = PawnState::Home;
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}

#[test]
fn swap_picks_furthest_mover_and_closest_victim() {
    let mut game = game_with(2, card(CardKind::Swap, 0));
    place(&mut game, Color::Blue, 0, 6); // distance 4
    place(&mut game, Color::Blue, 1, 20); // distance 49 -> mover
    place(&mut game, Color::Yellow, 0, 30); // distance 39 to blue home
    place(&mut game, Color::Yellow, 1, 9); // distance 1 -> victim
    assert_eq!(
        evaluate(&game, Color::Blue),
        Outcome::Swap {
            pawn: 1,
            victim: PawnRef {
                color: Color::Yellow,
                pawn: 1
            }
        }
    );
}

#[test]
fn swap_forfeits_without_an_on_board_mover() {
    let mut game = game_with(2, card(CardKind::Swap, 0));
    place(&mut game, Color::Yellow, 0, 30);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}

#[test]
fn swap_forfeits_without_an_on_board_victim() {
    let mut game = game_with(2, card(CardKind::Swap, 0));
    place(&mut game, Color::Blue, 0, 30);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}

#[test]
fn swap_ignores_inactive_colors() {
    // Red has a pawn parked on the board but only two colors are active.
    let mut game = game_with(2, card(CardKind::Swap, 0));
    place(&mut game, Color::Blue, 0, 30);
    place(&mut game, Color::Red, 0, 44);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}

#[test]
fn sorry_pairs_first_startable_with_closest_victim() {
    let mut game = game_with(2, card(CardKind::Sorry, 0));
    place(&mut game, Color::Yellow, 0, 30);
    place(&mut game, Color::Yellow, 1, 9);
    assert_eq!(
        evaluate(&game, Color::Blue),
        Outcome::Sorry {
            pawn: 0,
            victim: PawnRef {
                color: Color::Yellow,
                pawn: 1
            }
        }
    );
}

#[test]
fn sorry_forfeits_without_a_startable_pawn() {
    let mut game = game_with(2, card(CardKind::Sorry, 0));
    for pawn in 0..4 {
        place(&mut game, Color::Blue, pawn, 30 + usize::from(pawn));
    }
    place(&mut game, Color::Yellow, 0, 9);
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}

#[test]
fn sorry_forfeits_without_an_on_board_victim() {
    let game = game_with(2, card(CardKind::Sorry, 0));
    assert_eq!(evaluate(&game, Color::Blue), Outcome::Forfeit);
}
