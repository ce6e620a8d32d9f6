use std::env;

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("text") => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/// Settings read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        let log_format = env::var("MEDPHYS_LOG_FORMAT").ok();
        Self {
            log_format: LogFormat::parse(log_format.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_the_default() {
        assert_eq!(LogFormat::parse(None), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("yaml")), LogFormat::Json);
    }

    #[test]
    fn text_is_case_insensitive() {
        assert_eq!(LogFormat::parse(Some("text")), LogFormat::Text);
        assert_eq!(LogFormat::parse(Some(" TEXT ")), LogFormat::Text);
    }
}
