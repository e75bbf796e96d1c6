//! Change notifications delivered to cube observers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{LayerMaskUint, Twist};

/// Notification of a twist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TwistEvent {
    /// Twist axis.
    pub axis: u8,
    /// Layers that were twisted.
    pub layer_mask: LayerMaskUint,
    /// Angle as requested by the caller.
    pub angle: i8,
    /// Global locations whose occupant or orientation changed, in ascending
    /// order.
    pub affected_locations: Vec<usize>,
}

impl TwistEvent {
    /// Returns the twist that produced this event.
    pub fn twist(&self) -> Twist {
        Twist::new(self.axis, self.layer_mask, self.angle)
    }
}

/// Notification of a change to a cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CubeEvent {
    /// The cube was twisted.
    Twisted(TwistEvent),
    /// The cube was changed some other way, such as by a reset, a sticker
    /// import, or leaving quiet mode.
    Changed {
        /// Global locations whose occupant or orientation changed, if known.
        affected_locations: Option<Vec<usize>>,
    },
}

/// Callback invoked synchronously after each change to a cube.
///
/// Observers run on the thread that made the change, while the cube is still
/// locked against other threads. They may read or even twist the cube.
pub type Observer = Arc<dyn Fn(&CubeEvent) + Send + Sync>;

/// Handle used to remove an observer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(pub(crate) u64);
