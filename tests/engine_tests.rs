//! Engine behaviour through the public API: steps, collisions, observers and
//! the frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tui_snake::core::{
    Collision, FrameOutcome, GameConfig, GameEngine, GridSurface, Observers, Paint, Snake,
    StepOutcome,
};
use tui_snake::types::{Direction, GameStatus, GridCell};

fn cells(raw: &[(u16, u16)]) -> Vec<GridCell> {
    raw.iter().map(|&(x, y)| GridCell::new(x, y)).collect()
}

fn running(body: &[(u16, u16)], direction: Direction, food: (u16, u16)) -> GameEngine<GridSurface> {
    running_with(body, direction, food, Observers::noop())
}

fn running_with(
    body: &[(u16, u16)],
    direction: Direction,
    food: (u16, u16),
    observers: Observers,
) -> GameEngine<GridSurface> {
    let snake = Snake::from_body(cells(body), direction).unwrap();
    GameEngine::new(GridSurface::new(), 10, 0, observers, true, &GameConfig::seeded(42))
        .unwrap()
        .with_layout(snake, GridCell::new(food.0, food.1))
        .unwrap()
}

#[test]
fn test_eating_food_grows_and_scores() {
    let scores = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&scores);
    let observers = Observers::new(move |s| sink.borrow_mut().push(s), |_| {});
    let mut engine = running_with(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (6, 5), observers);

    assert_eq!(engine.step(), StepOutcome::Ate { score: 10 });

    let body: Vec<GridCell> = engine.snake().body().copied().collect();
    assert_eq!(body, cells(&[(6, 5), (5, 5), (4, 5), (3, 5)]));
    assert_eq!(engine.score(), 10);
    assert_eq!(*scores.borrow(), vec![10]);
    assert!(!engine.snake().occupies(engine.food()));
    assert!(engine.food().in_bounds(10));
}

#[test]
fn test_plain_move_does_not_score() {
    let mut engine = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 0));
    assert_eq!(engine.step(), StepOutcome::Moved);
    assert_eq!(engine.score(), 0);
    let body: Vec<GridCell> = engine.snake().body().copied().collect();
    assert_eq!(body, cells(&[(6, 5), (5, 5), (4, 5)]));
}

#[test]
fn test_wall_collision_ends_game_once() {
    let over = Rc::new(Cell::new(0u32));
    let count = Rc::clone(&over);
    let observers = Observers::new(|_| {}, move |flag| {
        assert!(flag);
        count.set(count.get() + 1);
    });
    let mut engine = running_with(&[(0, 5), (1, 5)], Direction::Left, (8, 8), observers);

    assert_eq!(engine.step(), StepOutcome::Collided(Collision::Wall));
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(over.get(), 1);
    let body: Vec<GridCell> = engine.snake().body().copied().collect();
    assert_eq!(body, cells(&[(0, 5), (1, 5)]));

    // Terminal: nothing else happens.
    assert_eq!(engine.step(), StepOutcome::Skipped);
    engine.animate(true);
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(over.get(), 1);
}

#[test]
fn test_last_write_wins_before_tick() {
    let mut engine = running(&[(5, 5), (6, 5), (7, 5)], Direction::Left, (0, 0));

    assert!(engine.change_movement("to top".parse().unwrap()));
    assert!(engine.change_movement("to left".parse().unwrap()));
    assert_eq!(engine.snake().pending(), Some(Direction::Left));

    engine.step();
    assert_eq!(engine.snake().head(), GridCell::new(4, 5));
}

#[test]
fn test_reversal_is_ignored() {
    let mut engine = running(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 0));

    assert!(!engine.change_movement(Direction::Left));
    assert_eq!(engine.snake().pending(), None);

    engine.step();
    assert_eq!(engine.snake().head(), GridCell::new(6, 5));
    assert_eq!(engine.snake().direction(), Direction::Right);
}

#[test]
fn test_pause_is_idempotent() {
    let mut engine = running(&[(5, 5), (4, 5)], Direction::Right, (0, 0));
    engine.animate(false);
    assert_eq!(engine.status(), GameStatus::Paused);
    engine.animate(false);
    assert_eq!(engine.status(), GameStatus::Paused);
}

#[test]
fn test_one_step_per_tick_interval() {
    let mut engine = running(&[(5, 5), (4, 5)], Direction::Right, (0, 0));

    let mut now = 0;
    while now < 160 {
        assert_eq!(engine.on_frame(now), FrameOutcome::Rendered { stepped: false });
        now += 16;
    }
    assert_eq!(engine.on_frame(160), FrameOutcome::Rendered { stepped: true });
    assert_eq!(engine.steps(), 1);
}

#[test]
fn test_stall_does_not_replay_steps() {
    let mut engine = running(&[(2, 5), (1, 5)], Direction::Right, (0, 0));
    engine.on_frame(0);
    // A one-second stall yields a single step.
    assert_eq!(engine.on_frame(1_000), FrameOutcome::Rendered { stepped: true });
    assert_eq!(engine.steps(), 1);
    assert_eq!(engine.on_frame(1_016), FrameOutcome::Rendered { stepped: false });
}

#[test]
fn test_paused_engine_renders_without_stepping() {
    let mut engine = running(&[(5, 5), (4, 5)], Direction::Right, (0, 0));
    engine.on_frame(0);
    engine.animate(false);

    for i in 1..=30 {
        assert_eq!(engine.on_frame(i * 16), FrameOutcome::Rendered { stepped: false });
    }
    assert_eq!(engine.steps(), 0);
    assert_eq!(engine.surface().frames(), 31);
    assert!(engine.is_frame_scheduled());

    // Time spent paused is not counted after resuming.
    engine.animate(true);
    assert_eq!(engine.on_frame(10_000), FrameOutcome::Rendered { stepped: false });
}

#[test]
fn test_stop_animation_cancels_frames() {
    let mut engine = running(&[(5, 5), (4, 5)], Direction::Right, (0, 0));
    engine.on_frame(0);
    engine.stop_animation();
    engine.stop_animation();

    assert_eq!(engine.on_frame(500), FrameOutcome::NotScheduled);
    assert_eq!(engine.steps(), 0);
    assert_eq!(engine.status(), GameStatus::Running);

    engine.animate(true);
    assert!(engine.is_frame_scheduled());
}

#[test]
fn test_render_failure_keeps_loop_alive() {
    let mut engine = running(&[(5, 5), (4, 5)], Direction::Right, (0, 0));
    engine.surface_mut().fail_next_frames(2);

    assert_eq!(engine.on_frame(0), FrameOutcome::Rendered { stepped: false });
    assert_eq!(engine.on_frame(16), FrameOutcome::Rendered { stepped: false });
    assert!(engine.is_frame_scheduled());
    assert_eq!(engine.surface().frames(), 0);

    engine.on_frame(32);
    assert_eq!(engine.surface().frames(), 1);
    assert_eq!(engine.surface().get(GridCell::new(5, 5)), Some(Paint::Head));
}

#[test]
fn test_game_over_renders_once_more_then_stops() {
    let mut engine = running(&[(9, 5), (8, 5)], Direction::Right, (0, 0));
    engine.on_frame(0);
    assert_eq!(engine.on_frame(160), FrameOutcome::Rendered { stepped: true });
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert!(!engine.is_frame_scheduled());
    assert_eq!(
        engine.surface().hud().map(|h| h.status),
        Some(GameStatus::GameOver)
    );
}

#[test]
fn test_initial_score_carries_over() {
    let engine = GameEngine::new(
        GridSurface::new(),
        12,
        70,
        Observers::noop(),
        false,
        &GameConfig::seeded(1),
    )
    .unwrap();
    assert_eq!(engine.score(), 70);
    assert_eq!(engine.status(), GameStatus::Idle);
}

#[test]
fn test_same_seed_same_game() {
    let run = || {
        let mut engine = GameEngine::new(
            GridSurface::new(),
            10,
            0,
            Observers::noop(),
            true,
            &GameConfig::seeded(99),
        )
        .unwrap();
        for _ in 0..3 {
            engine.step();
        }
        engine.snapshot()
    };
    assert_eq!(run(), run());
}
