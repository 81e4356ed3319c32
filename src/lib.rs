//! # Worldmap
//!
//! Plots a whitespace-separated file of `<longitude> <latitude>` points as
//! braille text. Points go through an equirectangular projection onto an
//! integer plane, and each terminal character holds a 2×4 block of dots.

pub mod canvas;
pub mod config;
pub mod errors;
pub mod geo;
pub mod pipeline;
pub mod projection;

pub use canvas::BrailleCanvas;
pub use config::MapConfig;
pub use errors::{MapError, Result};
pub use geo::{parse_point, GeoPoint};
pub use pipeline::{plot_reader, read_points, render_map};
pub use projection::{project, CanvasPoint, Projection, ProjectionParams};
