//! Tests for the minimax strategy: winning-move detection and best-move choice.

use tictactoe_engine::{
    Board, DRAW_SCORE, FirstAvailableStrategy, GameStrategy, MinimaxStrategy, Player, Position,
    WIN_SCORE, minimax,
};

fn board(s: &str) -> Board {
    s.parse().expect("Valid board literal")
}

fn indices(positions: Vec<Position>) -> Vec<usize> {
    positions.into_iter().map(Position::to_index).collect()
}

fn best_index(s: &str, player: Player) -> Option<usize> {
    MinimaxStrategy
        .find_best_move(&board(s), player)
        .map(Position::to_index)
}

#[test]
fn test_opponent_winning_moves() {
    let strategy = MinimaxStrategy;
    let cases: [(&str, Player, Vec<usize>); 6] = [
        ("XOXOXO...", Player::X, vec![6, 8]),
        ("XX.OO....", Player::O, vec![5]),
        ("XX.OO....", Player::X, vec![2]),
        ("X.O.X.O..", Player::X, vec![8]),
        ("XX.X.O.OO", Player::X, vec![2, 6]),
        ("X........", Player::O, vec![]),
    ];
    for (literal, player, expected) in cases {
        let found = strategy.find_opponent_winning_moves(&board(literal), player);
        assert_eq!(indices(found), expected, "{} for {}", literal, player);
    }
}

#[test]
fn test_no_winning_moves_on_terminal_boards() {
    let strategy = MinimaxStrategy;
    assert!(strategy
        .find_opponent_winning_moves(&board("XOXOXOOXO"), Player::X)
        .is_empty());
    // Already won by X; O could complete column 0 but the game is over.
    assert!(strategy
        .find_opponent_winning_moves(&board("XXXOO.O.."), Player::O)
        .is_empty());
}

#[test]
fn test_best_move_takes_immediate_win() {
    assert_eq!(best_index("X.O.X.O..", Player::X), Some(8));
    assert_eq!(best_index("XX.OO....", Player::O), Some(5));
    assert_eq!(best_index("XX.OO....", Player::X), Some(2));
    assert_eq!(best_index("O.X.X.O..", Player::O), Some(3));
}

#[test]
fn test_best_move_prefers_center_without_forced_win() {
    assert_eq!(best_index(".........", Player::X), Some(4));
    assert_eq!(best_index("X........", Player::O), Some(4));
}

#[test]
fn test_best_move_follows_forced_win_over_center() {
    // X can force a win from (1,0) as well as the center; the earliest wins.
    assert_eq!(best_index("XO.......", Player::X), Some(3));
}

#[test]
fn test_best_move_none_on_terminal_boards() {
    assert_eq!(best_index("XOXOXOOXO", Player::X), None);
    assert_eq!(best_index("XXXOO....", Player::O), None);
}

#[test]
fn test_minimax_scores() {
    assert_eq!(minimax(&board("XXXOO...."), 0, true, Player::X), WIN_SCORE);
    assert_eq!(minimax(&board("XXXOO...."), 3, false, Player::O), -WIN_SCORE + 3);
    assert_eq!(minimax(&board("XOXOXOOXO"), 5, true, Player::X), DRAW_SCORE);
    assert_eq!(minimax(&Board::new(), 0, true, Player::X), DRAW_SCORE);
}

#[test]
fn test_score_moves_lists_every_empty_square() {
    let scores = MinimaxStrategy.score_moves(&board("XO......."), Player::X);
    let expected = vec![(2, 0), (3, 6), (4, 6), (5, 0), (6, 6), (7, 0), (8, 0)];
    let actual: Vec<(usize, i32)> = scores
        .into_iter()
        .map(|(pos, score)| (pos.to_index(), score))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_strategies_as_trait_objects() {
    let strategies: Vec<Box<dyn GameStrategy>> =
        vec![Box::new(MinimaxStrategy), Box::new(FirstAvailableStrategy)];
    let open = board("X........");
    for strategy in &strategies {
        let choice = strategy
            .find_best_move(&open, Player::O)
            .expect("Open board has a move");
        assert!(open.is_position_empty(choice), "{}", strategy.name());
    }
    assert_eq!(strategies[1].find_best_move(&open, Player::O), Position::from_index(1).ok());
}
