//! Engine error types
//!
//! Only programmer errors surface as `Error`; boundary conditions that arise
//! from normal drawing math (off-canvas coordinates, empty rectangles) are
//! silent no-ops and must never abort a frame.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Canvas construction with a zero width, height, or scale factor
    #[error("invalid canvas dimensions: {width}x{height} at scale {scale}")]
    InvalidDimension { width: u32, height: u32, scale: u32 },

    /// Malformed argument, e.g. a polygon point list with an odd length or
    /// too few vertices for the requested operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
