//! Dispatch error types.

use fieldlog_core::FilterError;
use fieldlog_format::FormatError;

/// Errors arising while delivering one event to one destination.
///
/// Values of this type are only ever handed to the router's error hook; the
/// logging call itself never surfaces them.
#[derive(Debug)]
pub enum RouteError {
    /// The destination's filter failed to evaluate.
    Filter(FilterError),
    /// The destination's formatter failed to encode the event.
    Format(FormatError),
    /// Writing the record or its separator to the sink failed.
    Write(std::io::Error),
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::Filter(e) => write!(f, "filter error: {e}"),
            RouteError::Format(e) => write!(f, "format error: {e}"),
            RouteError::Write(e) => write!(f, "write error: {e}"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Filter(e) => Some(e),
            RouteError::Format(e) => Some(e),
            RouteError::Write(e) => Some(e),
        }
    }
}

impl From<FilterError> for RouteError {
    fn from(err: FilterError) -> Self {
        RouteError::Filter(err)
    }
}

impl From<FormatError> for RouteError {
    fn from(err: FormatError) -> Self {
        RouteError::Format(err)
    }
}

impl From<std::io::Error> for RouteError {
    fn from(err: std::io::Error) -> Self {
        RouteError::Write(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_route_error_display() {
        let filter = RouteError::Filter(FilterError::new("probe failed"));
        let format = RouteError::Format(FormatError::other("bad record"));
        let write = RouteError::Write(std::io::Error::other("pipe closed"));

        assert_eq!(filter.to_string(), "filter error: probe failed");
        assert_eq!(format.to_string(), "format error: bad record");
        assert_eq!(write.to_string(), "write error: pipe closed");
    }

    #[test]
    fn test_route_error_source() {
        let filter = RouteError::Filter(FilterError::new("x"));
        let format = RouteError::Format(FormatError::other("y"));
        let write = RouteError::Write(std::io::Error::other("z"));

        assert!(filter.source().is_some());
        assert!(format.source().is_some());
        assert!(write.source().is_some());
    }
}
