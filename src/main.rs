//! Paddy Run entry point
//!
//! Headless demo host: drives the simulation at a fixed timestep with a
//! small autopilot standing in for player input, prints periodic stats,
//! and finishes with the run summary. Rendering hosts wrap the same
//! `tick`/`drain_events` surface.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use paddy_run::commentary;
use paddy_run::settings::Settings;
use paddy_run::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Demo length cap: ten simulated minutes
const MAX_TICKS: u64 = 60 * 60 * 10;

/// Host-side game instance: latched input plus the simulation state.
/// Input events are captured into one-shot flags and cleared after each
/// tick so a request arriving between frames is consumed exactly once.
struct Game {
    state: GameState,
    input: TickInput,
}

impl Game {
    fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            input: TickInput::default(),
        }
    }

    fn update(&mut self) {
        let input = self.input;
        tick(&mut self.state, &input);
        // Clear one-shot inputs after processing
        self.input = TickInput::default();
    }

    /// Jump when the nearest threatening obstacle closes within a
    /// speed-scaled window. Good enough to survive for a while.
    fn autopilot(&mut self) {
        if self.state.phase != GamePhase::Playing || !self.state.runner.grounded {
            return;
        }
        let runner_front = self.state.runner.rect.right();
        let window = self.state.base_speed * 14.0;
        let threat = self
            .state
            .obstacles
            .iter()
            .filter(|o| o.rect.right() > runner_front)
            .map(|o| o.rect.x - runner_front)
            .fold(f32::INFINITY, f32::min);
        if threat < window {
            self.input.jump = true;
        }
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let settings = Settings::load_from(Path::new("paddy-run-settings.json"));
    log::info!(
        "starting demo run, seed {seed}, particles {}",
        settings.effective_max_particles()
    );

    let mut game = Game::new(seed);
    game.input.start = true;

    let mut game_over = false;
    for _ in 0..MAX_TICKS {
        game.autopilot();
        game.update();

        for event in game.state.drain_events() {
            match event {
                GameEvent::Stats(stats) => {
                    if game.state.frame % 600 == 0 {
                        log::info!(
                            "tick {}: score {} coins {} distance {}",
                            game.state.frame,
                            stats.score,
                            stats.coins,
                            stats.distance
                        );
                    }
                }
                GameEvent::GameOver => {
                    game_over = true;
                }
            }
        }
        if game_over {
            break;
        }
    }

    let stats = game.state.stats();
    let summary = commentary::summarize(stats.distance, stats.coins, &mut game.state.rng);
    if !game_over {
        log::info!("demo cap reached before the chaser caught up");
    }

    match serde_json::to_string_pretty(&serde_json::json!({
        "stats": stats,
        "summary": summary,
    })) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            // Commentary must never block the numeric stats
            log::warn!("summary serialization failed: {err}");
            let fallback = paddy_run::RunSummary::fallback();
            println!(
                "score {} coins {} distance {} - {}: {}",
                stats.score, stats.coins, stats.distance, fallback.title, fallback.comment
            );
        }
    }
}
