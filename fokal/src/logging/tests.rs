use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{level_to_log_level, log_level_to_level, parse_log_level};
use std::sync::Once;

static INIT: Once = Once::new();

#[test]
fn test_init_console_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Compact,
            file: None,
            stdout: true,
        };

        assert!(crate::logging::init(&config).is_ok());
    });
}

#[test]
fn test_init_without_outputs_is_noop() {
    let config = LoggingConfig {
        level: LogLevel::Info,
        format: LogFormat::Default,
        file: None,
        stdout: false,
    };

    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_level_conversion() {
    assert!(parse_log_level("trace").is_ok());
    assert!(parse_log_level("DEBUG").is_ok());
    assert!(parse_log_level("info").is_ok());
    assert!(parse_log_level("warn").is_ok());
    assert!(parse_log_level("error").is_ok());
    assert!(parse_log_level("verbose").is_err());

    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ] {
        assert_eq!(level_to_log_level(log_level_to_level(level)), level);
    }
}

#[test]
fn test_init_fails_when_log_directory_cannot_be_created() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let config = LoggingConfig {
        level: LogLevel::Info,
        format: LogFormat::Json,
        file: Some(blocker.join("logs").join("fokal.log")),
        stdout: false,
    };

    assert!(matches!(
        crate::logging::init(&config),
        Err(crate::logging::LogError::IoError(_))
    ));

    let mut fokal_config = crate::config::FokalConfig::default();
    fokal_config.logging = config;
    assert!(matches!(
        crate::init(fokal_config),
        Err(crate::FokalError::Logging(_))
    ));
}
