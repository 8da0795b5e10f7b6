//! Cannon Climb headless runner
//!
//! Drives the simulation with a scripted input track and logs what happens.
//! Useful for eyeballing determinism: same seed, same transcript. The final
//! frame snapshot is printed as JSON, the same shape a renderer would read
//! each tick.

use cannon_climb::consts::TICK_DT;
use cannon_climb::sim::{GameState, Level, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);

    let mut state = GameState::new(Level::tower(), seed);
    let mut input = TickInput::default();

    // Scripted run: walk away from the start, hop every three seconds, and
    // let the cannon balls decide how it ends.
    let mut last_motion = state.player.motion;
    for tick_index in 0..3600u32 {
        input.move_right = true;
        input.jump = tick_index % 90 == 0;
        tick(&mut state, &input, TICK_DT);

        if state.player.motion != last_motion {
            log::info!(
                "tick {tick_index}: {:?} -> {:?} at {:?}",
                last_motion,
                state.player.motion,
                state.player.position
            );
            last_motion = state.player.motion;
        }
        if state.player.is_dead() || state.player.is_victorious() {
            break;
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
