use crate::config::SyncConfig;
use crate::utils::error::{Result, SyncError};
use regex::Regex;
use std::path::Path;

impl SyncConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SyncError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SyncError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` with the environment value; unknown variables are left untouched.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SyncError::ConfigError {
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_toml_str_full() {
        let config = SyncConfig::from_toml_str(
            r#"
[source]
base_url = "http://127.0.0.1:41184"
token = "abc"
timeout_seconds = 10

[run]
inspect = true
stop_after_first_tagged = true
page_size = 50
utc_offset = "-08:00"
"#,
        )
        .unwrap();

        assert_eq!(config.source.base_url, "http://127.0.0.1:41184");
        assert_eq!(config.source.token.as_deref(), Some("abc"));
        assert_eq!(config.source.timeout_seconds, Some(10));
        assert!(config.run.inspect);
        assert!(config.run.stop_after_first_tagged);
        assert_eq!(config.run.page_size, 50);
        assert_eq!(config.run.utc_offset.as_deref(), Some("-08:00"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = SyncConfig::from_toml_str("[source]\ntoken = \"abc\"\n").unwrap();
        assert_eq!(config.source.base_url, "http://localhost:41184");
        assert!(!config.run.inspect);
        assert_eq!(config.run.page_size, 100);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("JOPLIN_FRONTMATTER_TEST_TOKEN", "from-env");
        let config = SyncConfig::from_toml_str(
            "[source]\ntoken = \"${JOPLIN_FRONTMATTER_TEST_TOKEN}\"\n",
        )
        .unwrap();
        assert_eq!(config.source.token.as_deref(), Some("from-env"));

        let config =
            SyncConfig::from_toml_str("[source]\ntoken = \"${JOPLIN_FRONTMATTER_UNSET_VAR}\"\n")
                .unwrap();
        assert_eq!(
            config.source.token.as_deref(),
            Some("${JOPLIN_FRONTMATTER_UNSET_VAR}")
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = SyncConfig::from_toml_str("[run]\ninspekt = true\n").unwrap_err();
        assert!(matches!(err, SyncError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[run]\ninspect = true").unwrap();

        let config = SyncConfig::from_file(file.path()).unwrap();
        assert!(config.run.inspect);

        assert!(matches!(
            SyncConfig::from_file("/nonexistent/joplin-frontmatter.toml"),
            Err(SyncError::IoError(_))
        ));
    }
}
