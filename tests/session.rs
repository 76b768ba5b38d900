//! End-to-end session scenarios

use std::sync::mpsc;
use std::thread;

use breakout::audio::{BRICK_BASE_KEY, Cue};
use breakout::render::FrameRecorder;
use breakout::sim::{FixedCadence, GamePhase, Key, KeyEvent, Outcome, ReleasePolicy};
use breakout::{Config, GameSession, SessionEvent};
use glam::Vec2;

type Recorded = GameSession<FrameRecorder, Vec<Cue>>;

fn session(config: Config) -> Recorded {
    GameSession::new(config, FrameRecorder::new(), Vec::new()).unwrap()
}

fn ticks(config: &Config, count: usize) -> impl Iterator<Item = SessionEvent> {
    FixedCadence::new(config.tick_interval_ms)
        .take(count)
        .map(SessionEvent::Tick)
}

#[test]
fn ball_destroys_brick_above_and_bounces() {
    // One column of two bricks straight above the ball
    let config = Config {
        brick_rows: 2,
        brick_columns: 1,
        ball_direction: Vec2::new(0.0, -2.0),
        ..Default::default()
    };
    let mut session = session(config.clone());

    let mut cadence = FixedCadence::new(config.tick_interval_ms);
    while session.state().destroyed == 0 {
        let now = cadence.next().unwrap();
        assert!(now < 5.0, "ball never reached the bricks");
        session.advance(now).unwrap();
    }

    let state = session.state();
    assert_eq!(state.bricks.len(), 1);
    assert_eq!(state.score, config.brick_reward);
    assert!(state.collisions.brick);
    assert!(state.ball.direction.y > 0.0);
    assert_eq!(state.phase, GamePhase::Playing);

    let frame = session.renderer().last().unwrap();
    assert!(frame.collisions.brick);
    assert_eq!(frame.bricks.len(), 1);
    assert_eq!(
        session.audio().last(),
        Some(&Cue::Brick {
            key: BRICK_BASE_KEY
        })
    );
}

#[test]
fn clearing_last_brick_wins() {
    let config = Config {
        brick_rows: 1,
        brick_columns: 1,
        ball_direction: Vec2::new(0.0, -2.0),
        ..Default::default()
    };
    let mut session = session(config.clone());
    let phase = session.run(ticks(&config, 1000)).unwrap();

    assert_eq!(phase, GamePhase::Over(Outcome::Won));
    assert_eq!(session.state().score, config.brick_reward);
    assert!(session.state().bricks.is_empty());
    assert_eq!(session.renderer().outcome, Some(Outcome::Won));
    assert_eq!(session.audio().last(), Some(&Cue::GameOver));
}

#[test]
fn empty_grid_wins_on_first_tick() {
    let config = Config {
        brick_rows: 0,
        ..Default::default()
    };
    let mut session = session(config.clone());
    let phase = session.run(ticks(&config, 10)).unwrap();

    assert_eq!(phase, GamePhase::Over(Outcome::Won));
    assert_eq!(session.state().tick_count, 1);
    assert_eq!(session.frames(), 0);
}

#[test]
fn missed_ball_loses_and_emissions_stop() {
    let config = Config {
        ball_direction: Vec2::new(0.0, 2.0),
        ..Default::default()
    };
    let mut session = session(config.clone());
    // Run the paddle out from under the ball
    session.handle_key(KeyEvent::Pressed(Key::Left));

    let phase = session.run(ticks(&config, 1000)).unwrap();
    assert_eq!(phase, GamePhase::Over(Outcome::Lost));
    assert_eq!(session.state().paddle, config.paddle_min());

    let frames = session.frames();
    let cues = session.audio().len();
    let snapshot = session.state().clone();
    session.handle_key(KeyEvent::Pressed(Key::Right));
    session.run(ticks(&config, 50)).unwrap();

    assert_eq!(session.frames(), frames);
    assert_eq!(session.audio().len(), cues);
    assert_eq!(session.state(), &snapshot);
}

#[test]
fn releasing_a_key_resets_to_neutral() {
    let config = Config::default();
    let mut session = session(config);
    session.advance(0.0).unwrap();

    session.handle_key(KeyEvent::Pressed(Key::Left));
    session.handle_key(KeyEvent::Pressed(Key::Right));
    session.handle_key(KeyEvent::Released(Key::Right));
    session.advance(0.1).unwrap();

    // Left is still physically held but the paddle does not move
    assert_eq!(session.state().paddle, 240.0);
}

#[test]
fn restore_held_policy_resumes_held_key() {
    let config = Config {
        release_policy: ReleasePolicy::RestoreHeld,
        ..Default::default()
    };
    let mut session = session(config);
    session.advance(0.0).unwrap();

    session.handle_key(KeyEvent::Pressed(Key::Left));
    session.handle_key(KeyEvent::Pressed(Key::Right));
    session.handle_key(KeyEvent::Released(Key::Right));
    session.advance(0.1).unwrap();

    assert!((session.state().paddle - 216.0).abs() < 0.001);
}

#[test]
fn channel_pump_runs_until_game_over() {
    let config = Config {
        brick_rows: 1,
        brick_columns: 1,
        ball_direction: Vec2::new(0.0, -2.0),
        ..Default::default()
    };
    let (tx, rx) = mpsc::channel();
    let interval = config.tick_interval_ms;
    let producer = thread::spawn(move || {
        for now in FixedCadence::new(interval).take(1000) {
            if tx.send(SessionEvent::Tick(now)).is_err() {
                break;
            }
        }
    });

    let mut session = session(config);
    let phase = session.run_channel(&rx).unwrap();
    drop(rx);
    producer.join().unwrap();

    assert_eq!(phase, GamePhase::Over(Outcome::Won));
}

#[test]
fn start_gate_holds_until_first_key() {
    let config = Config {
        start_on_input: true,
        ..Default::default()
    };
    let mut session = session(config.clone());
    let start = session.state().ball;

    session.run(ticks(&config, 100)).unwrap();
    assert_eq!(session.phase(), GamePhase::Ready);
    assert_eq!(session.state().ball, start);
    assert_eq!(session.state().tick_count, 0);

    session.handle(SessionEvent::Key(KeyEvent::Pressed(Key::Left))).unwrap();
    session.handle(SessionEvent::Tick(2.0)).unwrap();
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.state().tick_count, 1);
    assert_ne!(session.state().ball, start);
}
