//! Build-time configuration.
//!
//! Each value can be overridden at compile time through an env var; there is
//! no runtime configuration.

use log::Level;

/// Id of the element the app mounts into. Falls back to `<body>` when absent.
pub const MOUNT_ID: &str = {
    match option_env!("LANDING_MOUNT_ID") {
        Some(id) => id,
        None => "root",
    }
};

/// Compiled Tailwind output.
pub const STYLESHEET_HREF: &str = {
    match option_env!("LANDING_STYLESHEET") {
        Some(href) => href,
        None => "/style.css",
    }
};

pub const PAGE_TITLE: &str = "Welcome to Our Website";

const LOG_LEVEL: &str = {
    match option_env!("LANDING_LOG_LEVEL") {
        Some(level) => level,
        None => "info",
    }
};

/// Console log level, `Info` unless `LANDING_LOG_LEVEL` names a valid level.
pub fn log_level() -> Level {
    parse_level(LOG_LEVEL)
}

fn parse_level(raw: &str) -> Level {
    raw.trim().parse().unwrap_or(Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known() {
        assert_eq!(parse_level("debug"), Level::Debug);
        assert_eq!(parse_level("WARN"), Level::Warn);
        assert_eq!(parse_level(" trace "), Level::Trace);
    }

    #[test]
    fn test_parse_level_fallback() {
        assert_eq!(parse_level(""), Level::Info);
        assert_eq!(parse_level("verbose"), Level::Info);
    }

    #[test]
    fn test_defaults() {
        if option_env!("LANDING_MOUNT_ID").is_none() {
            assert_eq!(MOUNT_ID, "root");
        }
        if option_env!("LANDING_STYLESHEET").is_none() {
            assert_eq!(STYLESHEET_HREF, "/style.css");
        }
    }
}
