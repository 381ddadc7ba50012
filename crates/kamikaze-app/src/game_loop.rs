//! Game loop thread. Runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside the loop thread and never leaves it.
//! Commands arrive via an `mpsc` channel; snapshots leave via another.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use kamikaze_core::constants::TICK_RATE;
use kamikaze_core::state::FrameSnapshot;
use kamikaze_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the snapshot receiver. The loop stops on
/// `Shutdown`, or when either end of the channels is dropped.
pub fn spawn_game_loop(
    config: SimConfig,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, mpsc::Receiver<FrameSnapshot>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snapshot_tx, snapshot_rx) = mpsc::channel::<FrameSnapshot>();

    std::thread::Builder::new()
        .name("kamikaze-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, snapshot_tx);
        })?;

    Ok((cmd_tx, snapshot_rx))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<FrameSnapshot>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::debug!("Game loop shutting down at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Hand the snapshot to whoever is drawing
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            log::warn!("Game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}
