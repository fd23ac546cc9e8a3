//! Pose state and transition rules for the rover.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One of the four compass points the rover can face.
///
/// Cyclic under rotation with period 4; there is no representable facing
/// outside these four values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Which way a rotation command turns the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Direction {
    /// The facing after one 90° turn to `side`.
    pub fn rotated(self, side: Side) -> Direction {
        match side {
            Side::Left => match self {
                Direction::North => Direction::West,
                Direction::West => Direction::South,
                Direction::South => Direction::East,
                Direction::East => Direction::North,
            },
            Side::Right => match self {
                Direction::North => Direction::East,
                Direction::East => Direction::South,
                Direction::South => Direction::West,
                Direction::West => Direction::North,
            },
        }
    }

    /// Unit grid step for one forward move while facing `self`.
    pub fn step(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::South => IVec2::NEG_Y,
            Direction::East => IVec2::X,
            Direction::West => IVec2::NEG_X,
        }
    }

    /// Single-letter compass code (`N`/`E`/`S`/`W`).
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Parses a single-letter compass code.
    pub fn from_letter(c: char) -> Result<Direction> {
        match c {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            other => Err(Error::UnknownDirection(other)),
        }
    }
}

/// Facing direction plus grid coordinates: the full rover state at an instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Signed grid coordinates. The grid is unbounded in every direction.
    pub location: IVec2,

    /// Current facing.
    pub direction: Direction,
}

impl Pose {
    /// Creates a pose at the given coordinates with the given facing.
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self {
            location: IVec2::new(x, y),
            direction,
        }
    }

    /// Moves one cell forward along the current facing.
    ///
    /// No wraparound and no bounds check; coordinates may grow without limit
    /// in either direction.
    pub fn advance(&mut self) {
        self.location += self.direction.step();
    }

    /// Turns 90° in place, leaving the location untouched.
    pub fn rotate(&mut self, side: Side) {
        self.direction = self.direction.rotated(side);
    }
}

impl Default for Pose {
    /// The origin, facing North.
    fn default() -> Self {
        Pose::new(0, 0, Direction::North)
    }
}

impl FromStr for Pose {
    type Err = Error;

    /// Parses `"X Y D"`: two signed integers and a compass letter.
    ///
    /// Runs of whitespace between fields are tolerated; anything beyond the
    /// three fields is not.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let mut field = || tokens.next().ok_or_else(|| Error::MalformedPose(s.to_owned()));

        let x = parse_coordinate(field()?)?;
        let y = parse_coordinate(field()?)?;

        let mut letters = field()?.chars();
        let direction = match (letters.next(), letters.next()) {
            (Some(c), None) => Direction::from_letter(c)?,
            _ => return Err(Error::MalformedPose(s.to_owned())),
        };

        if tokens.next().is_some() {
            return Err(Error::MalformedPose(s.to_owned()));
        }

        Ok(Pose::new(x, y, direction))
    }
}

impl fmt::Display for Pose {
    /// Report format: `"<X> <Y> <letter>"`, space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.location.x,
            self.location.y,
            self.direction.letter()
        )
    }
}

fn parse_coordinate(token: &str) -> Result<i32> {
    token.parse().map_err(|source| Error::InvalidCoordinate {
        token: token.to_owned(),
        source,
    })
}
