//! Environment-derived configuration.
//!
//! The detect command is invoked by the peer, not a human, so the only knob
//! is the debug variable. It is read once at start-up and handed down through
//! [`CmdContext`](crate::util::CmdContext); nothing else consults the
//! environment.

/// Environment variable that enables debug logging.
pub const DEBUG_VARIABLE: &str = "FABRIC_K8S_BUILDER_DEBUG";

/// Builder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit debug-level log lines
    pub debug: bool,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    ///
    /// Values that are absent or unparsable fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = lookup(DEBUG_VARIABLE)
            .and_then(|value| parse_bool(&value))
            .unwrap_or(false);

        Config { debug }
    }
}

/// Parse a textual boolean.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts
/// `0`, `f`, `F`, `FALSE`, `false`, `False`. Anything else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, DEBUG_VARIABLE);
            value.map(str::to_string)
        }
    }

    #[test]
    fn test_parse_bool_accepts_conventional_forms() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Some(true), "{value}");
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Some(false), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_everything_else() {
        for value in ["", "yes", "on", "tRUE", " true", "2", "debug"] {
            assert_eq!(parse_bool(value), None, "{value:?}");
        }
    }

    #[test]
    fn test_debug_defaults_to_disabled() {
        assert!(!Config::from_lookup(lookup(None)).debug);
        assert_eq!(Config::default(), Config::from_lookup(lookup(None)));
    }

    #[test]
    fn test_debug_enabled() {
        assert!(Config::from_lookup(lookup(Some("true"))).debug);
        assert!(Config::from_lookup(lookup(Some("1"))).debug);
    }

    #[test]
    fn test_unparsable_debug_is_disabled() {
        assert!(!Config::from_lookup(lookup(Some("verbose"))).debug);
        assert!(!Config::from_lookup(lookup(Some(""))).debug);
    }
}
