//! File to canvas pipeline
//!
//! Records are read in file order, each one parsed, projected and plotted.
//! The first bad record aborts the run before anything is rendered.

use std::fs::File;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::canvas::BrailleCanvas;
use crate::config::MapConfig;
use crate::errors::{MapError, Result};
use crate::geo::{GeoPoint, RawRecord};
use crate::projection::{project, ProjectionParams};

/// Field separator of point files
pub const DELIMITER: u8 = b' ';

/// Lines starting with this byte are skipped
pub const COMMENT: u8 = b'#';

fn point_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(DELIMITER)
        .comment(Some(COMMENT))
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

fn record_to_point(record: &StringRecord) -> Result<GeoPoint> {
    let line = record.position().map_or(0, csv::Position::line);
    let (Some(first), Some(second), 2) = (record.get(0), record.get(1), record.len()) else {
        return Err(MapError::Format {
            fields: record.len(),
            line: Some(line),
        });
    };
    RawRecord::from_columns(first, second)
        .parse()
        .map_err(|e| e.at_line(line))
}

/// Read every point of a `<longitude> <latitude>` stream
pub fn read_points<R: Read>(input: R) -> Result<Vec<GeoPoint>> {
    let mut reader = point_reader(input);
    let mut points = Vec::new();
    for record in reader.records() {
        points.push(record_to_point(&record?)?);
    }
    Ok(points)
}

/// Project every record of the stream onto a north-up canvas
pub fn plot_reader<R: Read>(input: R, params: &ProjectionParams) -> Result<BrailleCanvas> {
    let mut reader = point_reader(input);
    let mut canvas = BrailleCanvas::inverted();
    let mut plotted = 0usize;

    for record in reader.records() {
        let point = record_to_point(&record?)?;
        let at = project(point, params);
        canvas.set(at.x, at.y);
        plotted += 1;
    }

    debug!(
        "Plotted {} records into {} dots ({:?})",
        plotted,
        canvas.len(),
        canvas.bounds()
    );
    Ok(canvas)
}

/// Read the configured world map and render it as braille text
pub fn render_map(config: &MapConfig) -> Result<String> {
    let path = config.world_map();
    info!(
        "Rendering {} with {} projection at scale {}",
        path.display(),
        config.projection(),
        config.scale()
    );

    let file = File::open(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let canvas = plot_reader(file, &ProjectionParams::from(config))?;

    let text = canvas.render();
    info!("Rendered {} rows", canvas.bounds().map_or(0, |b| b.rows()));
    Ok(text)
}
