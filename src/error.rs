//! Error type shared by the propagators.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("eccentricity {eccentricity} of body {body} outside elliptic range [0, 1)")]
    EccentricityOutOfRange { body: String, eccentricity: f64 },

    #[error("non-finite simulation time: {0}")]
    NonFiniteTime(f64),

    #[error("non-finite angle: {0} deg")]
    NonFiniteAngle(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("element table entry at position {expected} carries index {found}")]
    IndexMismatch { expected: usize, found: usize },

    #[error("element table is empty")]
    EmptyTable,

    #[error("body index {index} out of range (table has {count} bodies)")]
    UnknownBody { index: usize, count: usize },

    #[error("span of {span} days needs more than {steps} integration steps")]
    SpanTooLong { span: f64, steps: u64 },

    #[error("bodies {first} and {second} are {separation} AU apart (singular gravity)")]
    CoincidentBodies {
        first: String,
        second: String,
        separation: f64,
    },
}
