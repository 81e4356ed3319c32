use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a point file into a map
#[derive(Error, Debug)]
pub enum MapError {
    /// A coordinate field is not a decimal number
    #[error("Invalid {field} '{value}'{}", line_suffix(.line))]
    Parse {
        field: &'static str,
        value: String,
        line: Option<u64>,
    },

    /// A coordinate is outside its geographic bounds
    #[error("Wrong value for {field}: {value}{}", line_suffix(.line))]
    Range {
        field: &'static str,
        value: f64,
        line: Option<u64>,
    },

    /// A record does not hold exactly a longitude and a latitude
    #[error("Expected longitude, latitude format: got {fields} field(s){}", line_suffix(.line))]
    Format { fields: usize, line: Option<u64> },

    /// Error when opening or reading the input file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error raised by the delimited text reader
    #[error("Malformed input: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

impl MapError {
    /// Attach the input line number to a record-level error
    pub fn at_line(self, at: u64) -> Self {
        match self {
            MapError::Parse { field, value, .. } => MapError::Parse {
                field,
                value,
                line: Some(at),
            },
            MapError::Range { field, value, .. } => MapError::Range {
                field,
                value,
                line: Some(at),
            },
            MapError::Format { fields, .. } => MapError::Format {
                fields,
                line: Some(at),
            },
            other => other,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, MapError::Parse { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, MapError::Range { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, MapError::Format { .. })
    }
}

/// Type alias for Result with `MapError`
pub type Result<T> = std::result::Result<T, MapError>;
