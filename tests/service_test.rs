//! Tests for the game service facade.

use tictactoe_engine::{
    FirstAvailableStrategy, GameError, GameId, GameRepository, GameService, InMemoryGameRepository,
    Position, ServiceError,
};

fn setup() -> GameService<InMemoryGameRepository> {
    GameService::new(InMemoryGameRepository::new())
}

#[test]
fn test_start_game_assigns_ids() {
    let service = setup();
    let first = service.start_game().expect("Start game");
    let second = service.start_game().expect("Start game");
    assert_eq!(first.game_id, 1);
    assert_eq!(second.game_id, 2);
    assert_eq!(first.current_player, 1);
    assert_eq!(first.status, "in_progress");
    assert_eq!(service.repository().len().unwrap(), 2);
}

#[test]
fn test_unknown_game() {
    let service = setup();
    let result = service.make_move(GameId::from(99), 1, 4);
    assert!(matches!(result, Err(ServiceError::GameNotFound { .. })));
    assert!(matches!(
        service.game_status(GameId::from(99)),
        Err(ServiceError::GameNotFound { .. })
    ));
}

#[test]
fn test_move_returns_annotated_snapshot() {
    let service = setup();
    let id = GameId::from(service.start_game().unwrap().game_id);

    service.make_move_at(id, 1, 0, 0).unwrap();
    service.make_move_at(id, 2, 1, 0).unwrap();
    let snapshot = service.make_move_at(id, 1, 0, 1).unwrap();

    assert_eq!(snapshot.current_player, 2);
    assert_eq!(snapshot.board[0], vec![Some(1), Some(1), None]);
    // O to move; X threatens the top row but O has no immediate win.
    assert_eq!(snapshot.opponent_winning_moves, Some(vec![]));
    assert!(snapshot.suggested_move.is_some());
}

#[test]
fn test_failed_move_is_not_saved() {
    let service = setup();
    let id = GameId::from(service.start_game().unwrap().game_id);
    service.make_move(id, 1, 4).unwrap();
    let before = service.repository().find_by_id(id).unwrap().unwrap();

    let occupied = service.make_move(id, 2, 4);
    assert!(matches!(
        occupied,
        Err(ServiceError::Game {
            source: GameError::PositionOccupied { .. }
        })
    ));

    let wrong_turn = service.make_move(id, 1, 0);
    assert!(matches!(
        wrong_turn,
        Err(ServiceError::Game {
            source: GameError::NotPlayersTurn { .. }
        })
    ));

    let bad_player = service.make_move(id, 3, 0);
    assert!(matches!(
        bad_player,
        Err(ServiceError::Game {
            source: GameError::InvalidPlayer { id: 3 }
        })
    ));

    let bad_index = service.make_move(id, 2, 9);
    assert!(matches!(
        bad_index,
        Err(ServiceError::Game {
            source: GameError::InvalidIndex { index: 9 }
        })
    ));

    let after = service.repository().find_by_id(id).unwrap().unwrap();
    assert_eq!(after, before);
    assert_eq!(after.updated_at(), before.updated_at());
}

#[test]
fn test_play_to_win_through_service() {
    let service = setup();
    let id = GameId::from(service.start_game().unwrap().game_id);
    for (player_id, index) in [(1, 0), (2, 3), (1, 1), (2, 4)] {
        service.make_move(id, player_id, index).unwrap();
    }
    let snapshot = service.make_move(id, 1, 2).unwrap();

    assert!(snapshot.is_finished);
    assert_eq!(snapshot.winner, Some(1));
    assert_eq!(snapshot.status, "won");
    assert_eq!(snapshot.suggested_move, None);
    assert_eq!(service.suggest_move(id).unwrap(), None);
    assert!(matches!(
        service.make_move(id, 2, 8),
        Err(ServiceError::Game {
            source: GameError::GameAlreadyFinished
        })
    ));
}

#[test]
fn test_suggest_move_uses_configured_strategy() {
    let service = GameService::with_strategy(
        InMemoryGameRepository::new(),
        Box::new(FirstAvailableStrategy),
    );
    let id = GameId::from(service.start_game().unwrap().game_id);
    assert_eq!(service.strategy().name(), "first_available");
    assert_eq!(service.suggest_move(id).unwrap(), Position::from_index(0).ok());

    let minimax = setup();
    let id = GameId::from(minimax.start_game().unwrap().game_id);
    assert_eq!(minimax.suggest_move(id).unwrap(), Some(Position::CENTER));
}
