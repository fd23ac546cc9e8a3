//! Collaborator seams and research order/result types.
//!
//! The rover core stays engine-agnostic: image capture, the receiving agency,
//! and identifier generation all sit behind traits so a host application (or a
//! test) can plug in whatever it has.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::pose::Pose;

/// Opaque captured image bytes.
pub type ImageData = Vec<u8>;

/// Image-capture capability consumed by the rover.
///
/// Capture is assumed to always succeed; this boundary has no documented
/// failure mode.
pub trait Camera {
    /// Requests one image.
    fn take_photo(&mut self) -> ImageData;
}

/// Remote agency sink that receives transferred photos.
///
/// The sink never rejects a delivery.
pub trait SpaceAgency {
    /// Stores one photo under `name`.
    fn receive_photo(&mut self, name: String, image: ImageData);
}

/// Source of fresh identifier tokens.
///
/// Contract: no two calls on the same source return the same token. Injected
/// at rover construction so tests can pin the exact sequence.
pub trait IdSource {
    /// Returns a token never returned by this source before.
    fn next_token(&mut self) -> String;
}

/// Monotonic-counter [`IdSource`], the default token generator.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdSource for SequentialIds {
    fn next_token(&mut self) -> String {
        let token = self.next.to_string();
        self.next += 1;
        token
    }
}

/// In-memory [`SpaceAgency`]: a plain name → image map.
#[derive(Clone, Debug, Default)]
pub struct MissionControl {
    /// Every photo delivered so far, keyed by its generated name.
    pub photos: HashMap<String, ImageData>,
}

impl MissionControl {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpaceAgency for MissionControl {
    fn receive_photo(&mut self, name: String, image: ImageData) {
        self.photos.insert(name, image);
    }
}

/// One exploration order: where the rover starts and what it should do.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResearchInfo {
    /// Initial pose string, `"X Y D"`.
    pub position: String,

    /// Command string over {M, L, R}.
    pub exploration: String,
}

impl ResearchInfo {
    pub fn new(position: impl Into<String>, exploration: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            exploration: exploration.into(),
        }
    }
}

/// Outcome of one completed research cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchEnded {
    /// Pose after the command string ran to completion.
    pub pose: Pose,

    /// The same pose formatted as `"<X> <Y> <letter>"`.
    pub report: String,
}
