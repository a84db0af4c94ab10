//! Rendering boundary
//!
//! The simulation never draws. Managers expose read-only state; this module
//! turns it into flat draw items and GPU instance data for a backend.

pub mod draw;
pub mod instance;
pub mod scene;

pub use draw::{DrawItem, DrawList, Drawable, Label, Shape};
pub use instance::InstanceRaw;
pub use scene::{Frame, LoadState, ResourceError, Scene};
