//! Log filter selection for the CLI binary

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Filter used when `RUST_LOG` is unset or blank
pub const DEFAULT_LOG_FILTER: &str = "cac_migrate=info";

/// Build the subscriber filter from a `RUST_LOG` value.
///
/// A non-blank value replaces the default entirely.
pub fn log_filter(rust_log: Option<&str>) -> Result<EnvFilter, ParseError> {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(DEFAULT_LOG_FILTER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::{Layer, Registry};

    fn max_level(filter: &EnvFilter) -> Option<LevelFilter> {
        <EnvFilter as Layer<Registry>>::max_level_hint(filter)
    }

    #[test]
    fn defaults_to_info_for_the_crate() {
        assert_eq!(max_level(&log_filter(None).unwrap()), Some(LevelFilter::INFO));
        assert_eq!(
            max_level(&log_filter(Some("  ")).unwrap()),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn rust_log_can_raise_the_crate_level() {
        let filter = log_filter(Some("cac_migrate=debug")).unwrap();
        assert_eq!(max_level(&filter), Some(LevelFilter::DEBUG));

        let global = log_filter(Some("trace")).unwrap();
        assert_eq!(max_level(&global), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_directives_are_rejected() {
        assert!(log_filter(Some("cac_migrate=loud")).is_err());
    }
}
