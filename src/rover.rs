//! The rover itself: command decoding, research cycles, and photo handling.
//!
//! The entry point is [`Rover`]. Construct it with a [`Camera`] and an
//! [`IdSource`], feed it exploration orders via [`Rover::research`], and flush
//! captured imagery with [`Rover::send_photos_to_nasa`].

use log::{debug, info};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::mission::{Camera, IdSource, ImageData, ResearchEnded, ResearchInfo, SpaceAgency};
use crate::pose::{Pose, Side};

/// Configuration for a rover.
#[derive(Clone, Debug)]
pub struct RoverConfig {
    /// File extension for generated photo names, without the dot.
    pub photo_extension: String,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            photo_extension: "bmp".to_owned(),
        }
    }
}

/// One step of an exploration command string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move one cell forward (`M`).
    Advance,
    /// Turn 90° in place (`L` / `R`).
    Turn(Side),
}

impl TryFrom<char> for Command {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'M' => Ok(Command::Advance),
            'L' => Ok(Command::Turn(Side::Left)),
            'R' => Ok(Command::Turn(Side::Right)),
            other => Err(Error::InvalidCommand(other)),
        }
    }
}

/// A single remote-controlled rover on an unbounded 2D integer grid.
///
/// The rover owns its pose and its captured-photo map; callers mutate both
/// exclusively through `&mut self`, which is the one-rover-one-writer boundary
/// this design requires.
pub struct Rover {
    name: String,
    pose: Pose,
    researching: bool,
    camera: Box<dyn Camera>,
    ids: Box<dyn IdSource>,
    photos: HashMap<String, ImageData>,
    config: RoverConfig,
}

impl Rover {
    /// Creates a rover at the origin facing North.
    ///
    /// The rover's name is drawn from `ids` once at construction and never
    /// changes; every research cycle afterwards replaces the pose wholesale
    /// from its order.
    pub fn new(camera: Box<dyn Camera>, mut ids: Box<dyn IdSource>, config: RoverConfig) -> Self {
        let name = ids.next_token();
        Self {
            name,
            pose: Pose::default(),
            researching: false,
            camera,
            ids,
            photos: HashMap::new(),
            config,
        }
    }

    /// The identifier generated at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// True while a research cycle is in flight.
    pub fn is_researching(&self) -> bool {
        self.researching
    }

    /// Number of photos captured and not yet transferred.
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Runs one research cycle and returns its outcome.
    ///
    /// Parses the order's initial pose, replaces the current pose with it
    /// unconditionally, runs the command string to completion, then requests
    /// one capture from the camera. A parse failure or an invalid command
    /// aborts the cycle; pose mutations already applied stand.
    ///
    /// Completion is reported as the returned [`ResearchEnded`] value rather
    /// than through an observer, so the caller decides how to consume it.
    pub fn research(&mut self, info: &ResearchInfo) -> Result<ResearchEnded> {
        self.researching = true;
        let outcome = self.run_cycle(info);
        self.researching = false;
        outcome
    }

    fn run_cycle(&mut self, info: &ResearchInfo) -> Result<ResearchEnded> {
        self.pose = info.position.parse()?;
        debug!("rover {} starting research at {}", self.name, self.pose);

        self.process_commands(&info.exploration)?;

        // End-of-cycle capture is a side effect reported to the camera only;
        // it does not land in the photo map.
        let _ = self.camera.take_photo();

        let report = self.pose.to_string();
        info!("rover {} research ended: {report}", self.name);
        Ok(ResearchEnded {
            pose: self.pose,
            report,
        })
    }

    /// Applies `commands` left to right, one character per step.
    ///
    /// Each command reads the pose left by the previous one; no reordering,
    /// no lookahead. The first unrecognized character aborts processing and
    /// nothing after it is applied.
    pub fn process_commands(&mut self, commands: &str) -> Result<()> {
        for c in commands.chars() {
            match Command::try_from(c)? {
                Command::Advance => self.pose.advance(),
                Command::Turn(side) => self.pose.rotate(side),
            }
        }
        Ok(())
    }

    /// Captures one photo and files it under a fresh generated name.
    ///
    /// Names have the form `"<name>-<token>.<ext>"`; the token comes from the
    /// injected [`IdSource`], whose contract guarantees no two calls collide.
    pub fn take_photo(&mut self) {
        let image = self.camera.take_photo();
        let name = format!(
            "{}-{}.{}",
            self.name,
            self.ids.next_token(),
            self.config.photo_extension
        );
        debug!("rover {} captured {name}", self.name);
        self.photos.insert(name, image);
    }

    /// Hands every stored photo to `agency`, keyed identically, and leaves
    /// the local map empty.
    ///
    /// The sink accepts deliveries unconditionally, so the drain always moves
    /// every entry; with nothing stored this is a no-op.
    pub fn send_photos_to_nasa(&mut self, agency: &mut dyn SpaceAgency) {
        if self.photos.is_empty() {
            return;
        }
        let count = self.photos.len();
        for (name, image) in self.photos.drain() {
            agency.receive_photo(name, image);
        }
        info!("rover {} transferred {count} photos", self.name);
    }
}
