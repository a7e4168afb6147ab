//! Raster encoding and output sinks.

/// Lossy raster encoders.
pub mod raster;
/// Sink trait and built-in sinks.
pub mod sink;
