//! Error types for timer state operations

use thiserror::Error;

/// Errors raised by timer configuration and lifecycle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("cannot run timer in \"DOWN\" (timer) mode with no duration")]
    MissingDuration,

    #[error("timer must be started before it is displayed")]
    NotStarted,

    #[error("timer snapshot could not be decoded: {0}")]
    Decode(String),

    #[error("timer snapshot could not be encoded: {0}")]
    Encode(String),
}
