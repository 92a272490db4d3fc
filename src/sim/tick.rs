//! Per-frame simulation step
//!
//! One call per rendered frame. Physics is frame-count based, there is no dt.

use rand::Rng;

use super::state::{GameEvent, RunnerState};

/// Advance the world by one frame.
///
/// Entities only read their own speed (pushed in during the preceding draw)
/// and the shared ground line, so the update order below carries no logic.
pub fn tick<R: Rng + ?Sized>(state: &mut RunnerState, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let launching = state.player.jump && state.player.is_grounded;
    let was_airborne = !state.player.is_grounded;

    state.player.update(state.frame.get());

    if launching {
        events.push(GameEvent::Jumped);
    }
    if was_airborne && state.player.is_grounded {
        events.push(GameEvent::Landed);
    }

    if state.obstacles.update(rng) {
        events.push(GameEvent::ObstaclesRespawned {
            x: state.obstacles.x,
            count: state.obstacles.segments.len(),
        });
    }

    state.background.update();

    state.frame.advance();
    state.time_ticks += 1;

    events
}
