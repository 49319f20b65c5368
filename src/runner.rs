//! Background tick loop
//!
//! One dedicated thread owns the motion state and drives the side effects:
//! move the cursor, click on cadence, and re-query the target window's
//! bounds on a counted tick modulo. A cancellation token is polled once per
//! iteration, so stop latency is bounded by one move interval.

use std::thread;

use glam::Vec2;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::platform::{BoundsSource, Pointer};
use crate::sim::{self, MotionState, TickParams};

/// Handle to a running tick loop
pub struct RunnerHandle {
    token: CancellationToken,
    thread: thread::JoinHandle<u64>,
}

impl RunnerHandle {
    /// Cancel the loop and wait for it to exit. Returns the tick count.
    pub fn stop(self) -> u64 {
        self.token.cancel();
        match self.thread.join() {
            Ok(ticks) => ticks,
            Err(_) => {
                log::error!("tick loop thread panicked");
                0
            }
        }
    }
}

/// Spawn the tick loop on its own thread.
///
/// `setup` runs on the loop thread: input handles are not `Send` on every
/// platform, so they are constructed where they are used.
pub fn spawn<F, P, W>(config: Config, setup: F) -> RunnerHandle
where
    F: FnOnce() -> (P, W) + Send + 'static,
    P: Pointer,
    W: BoundsSource,
{
    let token = CancellationToken::new();
    let loop_token = token.clone();
    let thread = thread::spawn(move || {
        let (mut pointer, mut windows) = setup();
        run_loop(&config, &mut pointer, &mut windows, loop_token)
    });
    RunnerHandle { token, thread }
}

fn run_loop<P: Pointer, W: BoundsSource>(
    config: &Config,
    pointer: &mut P,
    windows: &mut W,
    token: CancellationToken,
) -> u64 {
    let start = match pointer.position() {
        Some(pos) => pos,
        None => {
            log::warn!("could not read cursor position, starting from origin");
            Vec2::ZERO
        }
    };

    let initial_bounds = config
        .target_window
        .as_deref()
        .and_then(|title| windows.bounds(title));
    let mut state = MotionState::new(start, config.direction, initial_bounds);

    let params = TickParams::from_config(config);
    let refresh = config.bounds_refresh_ticks();
    let interval = config.move_interval_duration();

    log::debug!("tick loop started at ({:.0}, {:.0})", start.x, start.y);

    while !token.is_cancelled() {
        if let Some(title) = config.target_window.as_deref() {
            if state.ticks > 0 && state.ticks % refresh == 0 {
                match windows.bounds(title) {
                    Some(bounds) => state.bounds = Some(bounds),
                    // Window closed or minimized: keep last-known bounds
                    None => log::debug!("target window '{title}' not found, keeping last bounds"),
                }
            }
        }

        let out = sim::tick(&mut state, &params);
        log::trace!(
            "tick {}: pos ({:.1}, {:.1}) click {}",
            state.ticks,
            out.pos.x,
            out.pos.y,
            out.click
        );

        pointer.move_to(out.pos);
        if out.click {
            pointer.click_pair();
        }

        thread::sleep(interval);
    }

    log::debug!("tick loop stopped after {} ticks", state.ticks);
    state.ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crate::sim::Bounds;

    #[derive(Clone, Default)]
    struct RecordingPointer {
        moves: Arc<Mutex<Vec<Vec2>>>,
        clicks: Arc<Mutex<u64>>,
    }

    impl Pointer for RecordingPointer {
        fn position(&mut self) -> Option<Vec2> {
            Some(Vec2::new(50.0, 50.0))
        }

        fn move_to(&mut self, pos: Vec2) {
            self.moves.lock().unwrap().push(pos);
        }

        fn click_pair(&mut self) {
            *self.clicks.lock().unwrap() += 1;
        }
    }

    struct FixedBounds(Option<Bounds>);

    impl BoundsSource for FixedBounds {
        fn bounds(&mut self, _title: &str) -> Option<Bounds> {
            self.0
        }
    }

    fn fast_config() -> Config {
        Config {
            move_distance: 2.0,
            click_interval: 0.01,
            move_interval: 0.002,
            ..Default::default()
        }
    }

    #[test]
    fn test_runner_stops_cleanly() {
        let pointer = RecordingPointer::default();
        let moves = pointer.moves.clone();

        let handle = spawn(fast_config(), move || (pointer, FixedBounds(None)));
        thread::sleep(Duration::from_millis(50));
        let ticks = handle.stop();

        assert!(ticks > 0);
        let recorded = moves.lock().unwrap().len() as u64;
        assert_eq!(recorded, ticks);

        // No further moves after stop
        thread::sleep(Duration::from_millis(20));
        assert_eq!(moves.lock().unwrap().len() as u64, recorded);
    }

    #[test]
    fn test_runner_clicks_on_cadence() {
        let pointer = RecordingPointer::default();
        let clicks = pointer.clicks.clone();

        // 0.01 / 0.002 → one click pair every 5 ticks
        let handle = spawn(fast_config(), move || (pointer, FixedBounds(None)));
        thread::sleep(Duration::from_millis(60));
        let ticks = handle.stop();

        assert_eq!(*clicks.lock().unwrap(), ticks / 5);
    }

    #[test]
    fn test_runner_respects_window_bounds() {
        let pointer = RecordingPointer::default();
        let moves = pointer.moves.clone();

        let mut config = fast_config();
        config.target_window = Some("editor".to_string());
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let inset = bounds.inset(crate::consts::BOUNDS_INSET);

        let handle = spawn(config, move || (pointer, FixedBounds(Some(bounds))));
        thread::sleep(Duration::from_millis(60));
        let ticks = handle.stop();

        assert!(ticks > 0);
        for pos in moves.lock().unwrap().iter() {
            assert!(inset.contains(*pos), "position {pos} escaped {inset:?}");
        }
    }
}
