#![deny(missing_docs)]

//! Defines the output format of traces, events, and spans produced
//! by `tracing` in lector and the libraries it consumes.

mod formats;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initializes a global tracing subscriber that formats
/// all logs produced by an application that calls init,
/// and all logs produced by libraries consumed by that application.
///
/// Nothing is printed unless a level is given. Up to `info` the output
/// stays compact. `debug` adds timestamps and targets, `trace` adds thread ids.
pub fn init(level: Option<Level>) {
    if let Some(level) = level {
        if level >= Level::TRACE {
            formats::very_verbose(level);
        } else if level >= Level::DEBUG {
            formats::verbose(level);
        } else {
            formats::least_verbose(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_core::metadata::ParseLevelError;

    use super::{Level, LEVELS};
    use std::str::FromStr;

    #[test]
    fn it_parses_all_possible_levels() -> Result<(), ParseLevelError> {
        for level in &LEVELS {
            Level::from_str(level)?;
        }
        Ok(())
    }

    #[test]
    fn levels_are_ordered_from_quietest_to_loudest() {
        let parsed: Vec<Level> = LEVELS
            .iter()
            .map(|level| Level::from_str(level).unwrap())
            .collect();
        let mut sorted = parsed.clone();
        sorted.sort();
        assert_eq!(parsed, sorted);
    }
}
