//! Wire types for the coach service.

pub mod coach;

pub use coach::{CoachKind, CoachRequest, CoachResponse, UnknownCoachKind};
