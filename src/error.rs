//! Error types for the rover core.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Faults raised while parsing an exploration order or interpreting commands.
///
/// Every variant is fatal to the operation that raised it: nothing is retried
/// and nothing is rolled back, the error propagates to the caller of the
/// research cycle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pose string does not have exactly the three `X Y D` fields
    #[error("malformed pose {0:?}: expected \"X Y D\"")]
    MalformedPose(String),

    /// Coordinate token is not a signed integer
    #[error("invalid coordinate {token:?}: {source}")]
    InvalidCoordinate {
        /// The offending token
        token: String,
        /// Underlying integer parse failure
        #[source]
        source: std::num::ParseIntError,
    },

    /// Direction letter is not one of N/E/S/W
    #[error("unknown compass letter {0:?}")]
    UnknownDirection(char),

    /// Command character is not one of M/L/R
    #[error("invalid command {0:?}")]
    InvalidCommand(char),
}
