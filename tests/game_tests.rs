//! End-to-end session behavior through the public operation set only:
//! boards are built by actually playing pieces.

use blockfall::core::GameSession;
use blockfall::types::{GameAction, PieceKind, DEFAULT_FALL_INTERVAL_MS};

fn running_session() -> GameSession {
    let mut session = GameSession::new(4242);
    session.reset();
    session
}

/// Spawn a vertical bar and drop it in the given column.
fn drop_vertical_bar(session: &mut GameSession, column: i8) {
    assert!(session.spawn_kind(PieceKind::I));
    session.rotate();
    let from = session.active().unwrap().x;
    for _ in 0..(column - from).abs() {
        if column < from {
            session.move_left();
        } else {
            session.move_right();
        }
    }
    assert_eq!(session.active().unwrap().x, column);
    session.hard_drop();
}

#[test]
fn square_spawns_on_columns_four_and_five() {
    let mut session = running_session();
    assert!(session.spawn_kind(PieceKind::O));

    let piece = session.active().unwrap();
    let mut blocks = piece.blocks().to_vec();
    blocks.sort_unstable();
    assert_eq!(blocks, vec![(4, 0), (4, 1), (5, 0), (5, 1)]);
    assert!(!session.game_over());
}

#[test]
fn filling_the_bottom_row_clears_it_and_scores_one_hundred() {
    let mut session = running_session();

    // Two flat bars cover columns 1-8 of the bottom row; a vertical bar
    // covers column 9 (and rows 16-18 above it).
    assert!(session.spawn_kind(PieceKind::I));
    session.move_left();
    session.move_left();
    session.hard_drop();

    assert!(session.spawn_kind(PieceKind::I));
    session.move_right();
    session.move_right();
    session.hard_drop();

    drop_vertical_bar(&mut session, 9);
    assert_eq!(session.score(), 0, "setup must not clear anything");

    // The vertical bar into column 0 completes the bottom row.
    drop_vertical_bar(&mut session, 0);

    assert_eq!(session.score(), 100);
    // Exactly one row cleared: the overhang above it slid down one row.
    assert!(session.board().is_occupied(0, 19));
    assert!(session.board().is_occupied(9, 19));
    assert!(!session.board().is_occupied(1, 19));
    // A fresh empty row appeared on top.
    for x in 0..10 {
        assert_eq!(session.board().get(x, 0), Some(None));
    }
    assert_eq!(session.board().cells().len(), 200);
}

#[test]
fn quadruple_clear_scores_eight_hundred_and_speeds_up() {
    let mut session = running_session();

    // Vertical bars fill columns 1-9 across rows 16-19.
    for column in 1..=9 {
        drop_vertical_bar(&mut session, column);
    }
    assert_eq!(session.score(), 0);
    assert_eq!(session.fall_interval_ms(), DEFAULT_FALL_INTERVAL_MS);

    // Column 0 completes all four rows at once.
    drop_vertical_bar(&mut session, 0);

    assert_eq!(session.score(), 800);
    assert_eq!(session.fall_interval_ms(), DEFAULT_FALL_INTERVAL_MS - 80);
    assert!(session.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn settling_without_a_clear_leaves_score_and_pace_alone() {
    let mut session = running_session();
    session.spawn_kind(PieceKind::T);
    session.hard_drop();

    assert_eq!(session.score(), 0);
    assert_eq!(session.fall_interval_ms(), DEFAULT_FALL_INTERVAL_MS);
    let settled = session.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(settled, 4);
}

#[test]
fn rejected_wall_move_leaves_the_piece_untouched() {
    let mut session = running_session();
    session.spawn_kind(PieceKind::O);
    for _ in 0..10 {
        session.move_right();
    }

    let before = session.active().unwrap();
    session.move_right();
    let after = session.active().unwrap();
    assert_eq!(after, before);
    assert_eq!(after.x, 8); // square's right column is x+1 = 9
}

#[test]
fn stacking_to_the_top_ends_the_session() {
    let mut session = running_session();

    // Drop everything straight down the middle until a spawn fails.
    for _ in 0..200 {
        if session.game_over() {
            break;
        }
        session.tick(); // spawns when nothing is falling
        session.hard_drop();
    }

    assert!(session.game_over());
    assert!(session.active().is_none());

    // Terminal state absorbs every further operation.
    let snapshot = session.board().cells().to_vec();
    let score = session.score();
    session.apply_action(GameAction::MoveLeft);
    session.apply_action(GameAction::Rotate);
    session.apply_action(GameAction::HardDrop);
    session.tick();
    assert_eq!(session.board().cells(), snapshot.as_slice());
    assert_eq!(session.score(), score);
}

#[test]
fn restart_action_recovers_from_game_over() {
    let mut session = running_session();
    for _ in 0..200 {
        if session.game_over() {
            break;
        }
        session.tick();
        session.hard_drop();
    }
    assert!(session.game_over());

    session.apply_action(GameAction::Restart);
    assert!(!session.game_over());
    assert!(!session.paused());
    assert_eq!(session.score(), 0);
    assert_eq!(session.fall_interval_ms(), DEFAULT_FALL_INTERVAL_MS);
    assert!(session.board().cells().iter().all(|c| c.is_none()));

    session.tick();
    assert!(session.active().is_some());
}

#[test]
fn score_never_decreases_and_grid_never_resizes() {
    let mut session = GameSession::new(777);
    session.start();

    let mut last_score = 0;
    for step in 0..2000 {
        if session.game_over() {
            break;
        }
        match step % 5 {
            0 => session.move_left(),
            1 => session.move_right(),
            2 => session.rotate(),
            3 => session.soft_drop(),
            _ => session.tick(),
        }
        assert!(session.score() >= last_score);
        last_score = session.score();
        assert_eq!(session.board().cells().len(), 200);
    }
}

#[test]
fn paused_session_ignores_gravity_and_input() {
    let mut session = running_session();
    session.spawn_kind(PieceKind::L);
    let before = session.active().unwrap();

    session.apply_action(GameAction::Pause);
    assert!(session.paused());
    for _ in 0..10 {
        session.tick();
        session.apply_action(GameAction::MoveLeft);
        session.apply_action(GameAction::SoftDrop);
    }
    assert_eq!(session.active().unwrap(), before);

    session.apply_action(GameAction::Pause);
    assert!(!session.paused());
    session.tick();
    assert_eq!(session.active().unwrap().y, before.y + 1);
}

#[test]
fn gravity_tick_descends_one_row_at_a_time() {
    let mut session = running_session();
    session.spawn_kind(PieceKind::S);
    let y0 = session.active().unwrap().y;

    session.tick();
    session.tick();
    assert_eq!(session.active().unwrap().y, y0 + 2);
}
