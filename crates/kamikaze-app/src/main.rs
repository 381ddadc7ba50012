//! Flies a short scripted sortie headlessly and logs how it went.
//!
//! Usage: `kamikaze-app [config.toml]`. Set `RUST_LOG` to change verbosity.

use std::time::Duration;

use kamikaze_app::game_loop;
use kamikaze_app::sortie::scripted_intent;
use kamikaze_app::state::GameLoopCommand;
use kamikaze_core::commands::{InputIntent, PlayerCommand};
use kamikaze_core::constants::TICK_RATE;
use kamikaze_core::enums::GamePhase;
use kamikaze_core::events::SimEvent;
use kamikaze_sim::SimConfig;

/// How long the demo flies before landing, in simulation seconds.
const SORTIE_SECONDS: u64 = 30;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(&path).unwrap_or_else(|e| {
            log::error!("Could not load {path}: {e}; using defaults");
            SimConfig::default()
        }),
        None => SimConfig::default(),
    };

    let (commands, snapshots) = match game_loop::spawn_game_loop(config) {
        Ok(channels) => channels,
        Err(e) => {
            log::error!("Failed to spawn game loop thread: {e}");
            std::process::exit(1);
        }
    };

    let ticks_per_second = TICK_RATE as u64;
    let mut held = InputIntent::default();
    let mut kills = 0usize;
    let mut shots = 0usize;

    for _ in 0..SORTIE_SECONDS * ticks_per_second {
        let snapshot = match snapshots.recv_timeout(Duration::from_secs(1)) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::error!("Game loop stopped responding: {e}");
                break;
            }
        };

        for event in &snapshot.events {
            match event {
                SimEvent::EnemyDestroyed { .. } => kills += 1,
                SimEvent::ShotFired { .. } => shots += 1,
                _ => {}
            }
        }

        let tick = snapshot.time.tick;
        if tick > 0 && tick % ticks_per_second == 0 {
            log::info!(
                "t={:>3}s health={:>3.0} enemies={:>2} bullets={:>3} shots={} kills={}",
                tick / ticks_per_second,
                snapshot.player.health,
                snapshot.enemies.len(),
                snapshot.bullets.len(),
                shots,
                kills
            );
        }

        if snapshot.phase == GamePhase::GameOver {
            log::info!("Shot down after {:.1}s with {kills} kills", snapshot.time.elapsed_secs);
            break;
        }
        if snapshot.enemies.is_empty() {
            log::info!("Sky cleared after {:.1}s", snapshot.time.elapsed_secs);
            break;
        }

        let intent = scripted_intent(tick);
        if intent != held {
            held = intent;
            let command = GameLoopCommand::PlayerCommand(PlayerCommand::SetIntent { intent });
            if commands.send(command).is_err() {
                break;
            }
        }
    }

    let _ = commands.send(GameLoopCommand::Shutdown);
}
