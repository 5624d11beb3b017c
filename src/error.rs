// src/error.rs
use std::fmt;
use std::io;

/// Errors raised while building a record from a raw payload.
///
/// Hostname resolution is the only fallible step of construction; callers
/// polling a server list should drop the one entry and keep going.
#[derive(Debug)]
pub enum RecordError {
    HostResolution { host: String, source: io::Error },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostResolution { host, source } => {
                write!(f, "Failed to resolve host {}: {}", host, source)
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HostResolution { source, .. } => Some(source),
        }
    }
}
