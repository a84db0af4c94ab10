//! Render gate between the simulation and a graphics backend
//!
//! The backend loads its resources asynchronously and reports back through
//! [`Scene::finish_loading`]. Until then, and until the simulation has run at
//! least one frame, [`Scene::render`] produces nothing.

use thiserror::Error;

use super::draw::{DrawList, Drawable};
use super::instance::InstanceRaw;
use crate::sim::GameState;

/// Failures reported by the graphics backend
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to load asset '{name}': {reason}")]
    Asset { name: String, reason: String },
    #[error("graphics device lost")]
    DeviceLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Draw data for one simulation frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Simulation frame this was built from
    pub frame: u64,
    pub draws: DrawList,
    pub instances: Vec<InstanceRaw>,
}

#[derive(Debug, Default)]
pub struct Scene {
    state: LoadState,
    frames_rendered: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Record the outcome of resource loading. A failure is fatal to the
    /// host and is handed back after being logged.
    pub fn finish_loading(&mut self, result: Result<(), ResourceError>) -> Result<(), ResourceError> {
        match result {
            Ok(()) => {
                self.state = LoadState::Ready;
                log::info!("Scene resources loaded");
                Ok(())
            }
            Err(e) => {
                self.state = LoadState::Failed;
                log::error!("Scene failed to load: {}", e);
                Err(e)
            }
        }
    }

    /// Drop device resources (device lost). Rendering pauses until the host
    /// reloads and calls [`finish_loading`](Self::finish_loading) again.
    pub fn release(&mut self) {
        if self.state == LoadState::Ready {
            log::warn!("Scene resources released");
        }
        self.state = LoadState::Pending;
    }

    /// Build draw data for the current game state
    pub fn render(&mut self, state: &GameState) -> Option<Frame> {
        if !self.is_loaded() || state.frame_count == 0 {
            return None;
        }

        let drawables: [&dyn Drawable; 6] = [
            &state.field,
            &state.chunks,
            &state.powerups,
            &state.bar,
            &state.ball,
            &state.score,
        ];

        let mut draws = DrawList::new();
        for drawable in drawables {
            drawable.draw(&mut draws);
        }

        let instances = InstanceRaw::from_list(&draws);
        self.frames_rendered += 1;

        Some(Frame {
            frame: state.frame_count,
            draws,
            instances,
        })
    }
}
