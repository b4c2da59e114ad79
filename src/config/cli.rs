use crate::config::SyncConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "joplin-frontmatter")]
#[command(about = "Prepend a front-matter block (id, timestamps, tags) to every Joplin note")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the Joplin data API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Web Clipper authorization token
    #[arg(long, env = "JOPLIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print the blocks (and note titles) without updating any note
    #[arg(long)]
    pub inspect: bool,

    /// With --inspect, stop after the first note that has tags. Ignored without --inspect
    #[arg(long)]
    pub stop_after_first_tagged: bool,

    /// Notes requested per page while listing
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Render timestamps with this offset (e.g. -08:00) instead of the system zone
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliArgs {
    /// Builds the effective configuration: defaults, then the TOML file, then flags.
    pub fn resolve(&self) -> Result<SyncConfig> {
        let mut config = match &self.config {
            Some(path) => SyncConfig::from_file(path)?,
            None => SyncConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut SyncConfig) {
        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.source.token = Some(token.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            config.source.timeout_seconds = Some(timeout);
        }
        if self.inspect {
            config.run.inspect = true;
        }
        if self.stop_after_first_tagged {
            config.run.stop_after_first_tagged = true;
        }
        if let Some(page_size) = self.page_size {
            config.run.page_size = page_size;
        }
        if let Some(offset) = &self.utc_offset {
            config.run.utc_offset = Some(offset.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_without_file() {
        let args = CliArgs::try_parse_from([
            "joplin-frontmatter",
            "--token",
            "abc",
            "--inspect",
            "--utc-offset",
            "-08:00",
        ])
        .unwrap();

        let config = args.resolve().unwrap();
        assert_eq!(config.source.token.as_deref(), Some("abc"));
        assert_eq!(config.source.base_url, "http://localhost:41184");
        assert!(config.run.inspect);
        assert!(!config.run.stop_after_first_tagged);
        assert_eq!(config.run.utc_offset.as_deref(), Some("-08:00"));
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\nbase_url = \"http://10.0.0.2:41184\"\ntoken = \"file-token\"\n\n[run]\npage_size = 20"
        )
        .unwrap();

        let args = CliArgs::try_parse_from([
            "joplin-frontmatter",
            "--config",
            file.path().to_str().unwrap(),
            "--token",
            "flag-token",
            "--page-size",
            "10",
        ])
        .unwrap();

        let config = args.resolve().unwrap();
        assert_eq!(config.source.base_url, "http://10.0.0.2:41184");
        assert_eq!(config.source.token.as_deref(), Some("flag-token"));
        assert_eq!(config.run.page_size, 10);
    }

    #[test]
    fn test_stop_flag_help_mentions_inspect() {
        let command = CliArgs::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "stop_after_first_tagged")
            .unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("Ignored without --inspect"), "{}", help);
    }
}
