//! Board controller lifecycle: rebuild on size change, play-flag forwarding,
//! listener lock-step and teardown.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode};
use tui_snake::board::{BoardController, BoardSizing, HostCommand, HostState, ResizeOutcome};
use tui_snake::core::{GameConfig, GridSurfaceProvider, StepOutcome};
use tui_snake::input::InputListeners;
use tui_snake::term::TermSurfaceProvider;
use tui_snake::types::{Direction, GameStatus, Viewport};

#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Vec<&'static str>>>,
    attached: bool,
}

impl InputListeners for Recorder {
    fn attach(&mut self) -> io::Result<()> {
        self.attached = true;
        self.log.borrow_mut().push("attach");
        Ok(())
    }

    fn detach(&mut self) -> io::Result<()> {
        self.attached = false;
        self.log.borrow_mut().push("detach");
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

fn board() -> (BoardController<GridSurfaceProvider, Recorder>, Rc<RefCell<Vec<&'static str>>>) {
    let recorder = Recorder::default();
    let log = Rc::clone(&recorder.log);
    let board = BoardController::new(
        GridSurfaceProvider,
        recorder,
        BoardSizing::default(),
        GameConfig::seeded(11),
    );
    (board, log)
}

fn key(code: KeyCode) -> Event {
    Event::Key(code.into())
}

#[test]
fn test_engine_rebuilt_only_when_side_changes() {
    let (mut board, log) = board();

    assert_eq!(board.resize(Viewport::new(80, 24)), ResizeOutcome::Rebuilt { side: 15 });
    assert_eq!(board.resize(Viewport::new(100, 24)), ResizeOutcome::Unchanged);
    assert_eq!(board.resize(Viewport::new(80, 40)), ResizeOutcome::Rebuilt { side: 26 });

    assert_eq!(*log.borrow(), vec!["attach", "detach", "attach"]);
    assert_eq!(board.engine().map(|e| e.grid_size()), Some(26));
}

#[test]
fn test_play_flag_forwards_without_rebuild() {
    let (mut board, log) = board();
    board.resize(Viewport::new(80, 24));
    assert_eq!(board.engine().map(|e| e.status()), Some(GameStatus::Idle));

    assert!(board.set_playing(true));
    let engine = board.engine_mut().unwrap();
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.step(), StepOutcome::Moved);

    board.set_playing(false);
    let engine = board.engine().unwrap();
    assert_eq!(engine.status(), GameStatus::Paused);
    assert_eq!(engine.steps(), 1);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_rebuild_keeps_score_and_play_flag() {
    let (mut board, _) = board();
    board.resize(Viewport::new(80, 24));
    board.set_playing(true);
    board.host().set_score(30);

    board.resize(Viewport::new(80, 40));
    let engine = board.engine().unwrap();
    assert_eq!(engine.score(), 30);
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.steps(), 0);
}

#[test]
fn test_game_over_reaches_host() {
    let host = Rc::new(HostState::new());
    let (board, _) = board();
    let mut board = board.with_host(Rc::clone(&host));
    board.resize(Viewport::new(80, 24));
    board.set_playing(true);

    let engine = board.engine_mut().unwrap();
    for _ in 0..500 {
        if engine.status() == GameStatus::GameOver {
            break;
        }
        engine.step();
    }

    assert!(host.is_game_over());
    assert!(!host.is_playing());
    assert!(!board.toggle_playing());
    assert_eq!(board.engine().map(|e| e.status()), Some(GameStatus::GameOver));
}

#[test]
fn test_resize_after_game_over_starts_fresh_game() {
    let (mut board, log) = board();
    board.resize(Viewport::new(80, 24));
    board.set_playing(true);

    let engine = board.engine_mut().unwrap();
    for _ in 0..500 {
        if engine.status() == GameStatus::GameOver {
            break;
        }
        engine.step();
    }
    assert!(board.host().is_game_over());

    assert_eq!(board.resize(Viewport::new(80, 40)), ResizeOutcome::Rebuilt { side: 26 });
    assert!(!board.host().is_game_over());
    assert!(!board.host().is_playing());
    assert_eq!(board.host().score(), 0);

    board.on_frame(0);
    let hud = board.engine().and_then(|e| e.surface().hud()).unwrap();
    assert_eq!(hud.status, GameStatus::Idle);
    assert_eq!(hud.score, 0);

    // The fresh game can be started without a restart.
    assert!(board.toggle_playing());
    assert_eq!(board.engine().map(|e| e.status()), Some(GameStatus::Running));
    assert_eq!(*log.borrow(), vec!["attach", "detach", "attach"]);
}

#[test]
fn test_events_route_through_adapter() {
    let (mut board, _) = board();
    board.resize(Viewport::new(80, 24));

    assert_eq!(
        board.handle_event(&key(KeyCode::Char('w'))),
        Some(HostCommand::Moved {
            direction: Direction::Up,
            accepted: true
        })
    );
    assert_eq!(
        board.handle_event(&key(KeyCode::Left)),
        Some(HostCommand::Moved {
            direction: Direction::Left,
            accepted: false
        })
    );
    assert_eq!(
        board.handle_event(&key(KeyCode::Esc)),
        Some(HostCommand::PlayToggled { playing: true })
    );
    assert_eq!(
        board.handle_event(&key(KeyCode::Esc)),
        Some(HostCommand::PlayToggled { playing: false })
    );
    assert_eq!(board.handle_event(&key(KeyCode::Char('x'))), None);
}

#[test]
fn test_restart_starts_fresh_game() {
    let (mut board, log) = board();
    board.resize(Viewport::new(80, 24));
    board.host().set_score(50);
    board.host().set_game_over(true);

    assert_eq!(
        board.handle_event(&key(KeyCode::Char('r'))),
        Some(HostCommand::Restarted(ResizeOutcome::Rebuilt { side: 15 }))
    );
    assert_eq!(board.host().score(), 0);
    assert!(!board.host().is_game_over());
    let engine = board.engine().unwrap();
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(*log.borrow(), vec!["attach", "detach", "attach"]);
}

#[test]
fn test_too_small_terminal_leaves_no_engine() {
    let recorder = Recorder::default();
    let log = Rc::clone(&recorder.log);
    let mut board = BoardController::new(
        TermSurfaceProvider::default(),
        recorder,
        BoardSizing::default(),
        GameConfig::seeded(3),
    );

    assert_eq!(board.resize(Viewport::new(20, 8)), ResizeOutcome::Unavailable);
    assert!(board.engine().is_none());
    assert!(!board.listeners().is_attached());
    assert_eq!(board.handle_event(&key(KeyCode::Up)), None);
    assert!(log.borrow().is_empty());

    assert_eq!(board.resize(Viewport::new(80, 24)), ResizeOutcome::Rebuilt { side: 15 });
    assert!(board.surface().is_some());
}

#[test]
fn test_drop_releases_listeners() {
    let (mut board, log) = board();
    board.resize(Viewport::new(80, 24));
    drop(board);
    assert_eq!(*log.borrow(), vec!["attach", "detach"]);
}
