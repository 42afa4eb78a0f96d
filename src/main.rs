//! Lunar Lander headless driver
//!
//! Runs a few autopilot episodes at 60 Hz and logs the outcomes. Set
//! `RUST_LOG=info` (or `debug` for terrain details) to see the episode log.

use lunar_lander::consts::*;
use lunar_lander::sim::{GameState, GameStatus, autopilot, step};
use lunar_lander::{GameConfig, HighScores};

/// Episodes to fly before exiting
const EPISODES: u32 = 5;
/// Frame interval of the driver loop (ms)
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Give up on an episode after two minutes of simulated time
const MAX_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    let config = GameConfig::default();
    let mut high_scores = HighScores::new();
    let mut state = GameState::new(&config, FIELD_WIDTH, FIELD_HEIGHT);
    let (mut landed, mut crashed) = (0u32, 0u32);

    for episode in 1..=EPISODES {
        let mut frames = 0;
        while !state.status.is_terminal() && frames < MAX_FRAMES {
            let input = autopilot(&state, &config);
            state = step(&state.with_input(input), &config, FRAME_MS);
            frames += 1;
        }

        match state.status {
            GameStatus::Landed => landed += 1,
            GameStatus::Crashed => crashed += 1,
            status => log::warn!("Episode {} stopped while {}", episode, status.as_str()),
        }
        println!(
            "episode {}: {} after {:.1}s, fuel {:.1}, score {}",
            episode,
            state.status.as_str(),
            state.time_ms / 1000.0,
            state.lander.fuel,
            state.score
        );
        if let Some(rank) = high_scores.record(&state) {
            println!("  new high score, rank {}", rank);
        }

        state = state.restart(&config);
    }

    println!(
        "\n{} landed, {} crashed, best score {}",
        landed,
        crashed,
        high_scores.top_score().unwrap_or(0)
    );
}
