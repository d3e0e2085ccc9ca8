use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use submarines::{
    Board, Coord, GameStatus, PieceConfig, PieceKind, Player, Signal, SubmarinesGame,
};

fn placed_game(config: &PieceConfig, shape: (usize, usize, usize), seed: u64) -> SubmarinesGame {
    let mut game = SubmarinesGame::new(shape, config).unwrap();
    let mut rng = SmallRng::seed_from_u64(seed);
    game.place_pieces(&mut rng).unwrap();
    game
}

fn some_empty_cell(board: &Board) -> Coord {
    let (rows, cols, planes) = board.shape().as_triple();
    for r in 0..rows {
        for c in 0..cols {
            for p in 0..planes {
                if board.cell((r, c, p)).is_none() {
                    return (r, c, p);
                }
            }
        }
    }
    unreachable!("board has no empty cell");
}

#[test]
fn piece_ids_are_unique_across_both_boards() {
    let config = PieceConfig::standard()
        .with(PieceKind::Jet, 2)
        .with(PieceKind::Submarine, 3);
    let game = placed_game(&config, (10, 10, 3), 4);

    let mut ids = HashSet::new();
    for player in [Player::One, Player::Two] {
        for piece in game.board(player).pieces() {
            assert!(ids.insert(piece.id()), "id {} appears twice", piece.id());
        }
    }
    assert_eq!(ids.len() as u32, config.total() * 2);
}

#[test]
fn turns_alternate_on_any_resolved_shot() {
    let mut game = placed_game(&PieceConfig::standard(), (10, 10, 3), 6);
    assert_eq!(game.to_move(), Player::One);

    // Player 1 fires at Player 2's board
    let target = some_empty_cell(game.board(Player::Two));
    assert_eq!(game.fire(target).unwrap(), Signal::Miss);
    assert_eq!(game.to_move(), Player::Two);

    let target = some_empty_cell(game.board(Player::One));
    assert_eq!(game.fire(target).unwrap(), Signal::Miss);
    assert_eq!(game.to_move(), Player::One);
}

#[test]
fn out_of_bounds_does_not_consume_the_turn() {
    let mut game = placed_game(&PieceConfig::standard(), (10, 10, 3), 6);
    assert!(game.fire((99, 99, 9)).is_err());
    assert_eq!(game.to_move(), Player::One);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn hitting_the_general_wins_for_the_shooter() {
    let config = PieceConfig::new().with(PieceKind::General, 1);
    let mut game = placed_game(&config, (4, 4, 3), 12);

    let general = game.board(Player::Two).pieces()[0].cells()[0];
    assert_eq!(game.fire(general).unwrap(), Signal::End);
    assert_eq!(game.status(), GameStatus::Over { winner: Player::One });
}

#[test]
fn reducing_a_board_to_its_general_wins() {
    let config = PieceConfig::new()
        .with(PieceKind::General, 1)
        .with(PieceKind::Submarine, 1);
    let mut game = placed_game(&config, (4, 4, 3), 15);

    // Player 1 sinks the only non-General piece on Player 2's board
    let submarine = game
        .board(Player::Two)
        .pieces()
        .iter()
        .find(|p| p.kind() == PieceKind::Submarine)
        .unwrap()
        .cells()[0];
    assert_eq!(game.fire(submarine).unwrap(), Signal::End);
    assert_eq!(game.status(), GameStatus::Over { winner: Player::One });
}

#[test]
fn a_full_match_reaches_a_winner() {
    let mut game = placed_game(&PieceConfig::standard(), (10, 10, 3), 23);
    let (rows, cols, planes) = game.board(Player::One).shape().as_triple();

    // each player sweeps the opponent's board row-major until someone wins
    let mut cursors = [0usize, 0usize];
    let total = rows * cols * planes;
    let mut last_shooter = Player::One;
    for _ in 0..total * 2 {
        if game.status() != GameStatus::InProgress {
            break;
        }
        let shooter = game.to_move();
        let cursor = &mut cursors[match shooter {
            Player::One => 0,
            Player::Two => 1,
        }];
        let coord = (
            *cursor / (cols * planes),
            (*cursor / planes) % cols,
            *cursor % planes,
        );
        *cursor += 1;
        last_shooter = shooter;
        game.fire(coord).unwrap();
    }

    assert_eq!(
        game.status(),
        GameStatus::Over {
            winner: last_shooter
        }
    );
}
