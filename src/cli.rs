//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "urlshort")]
#[command(about = "Redirects request paths to URLs listed in a YAML or JSON file", long_about = None)]
pub struct Cli {
    /// YAML rules file (`- path: /x` / `url: https://...` entries)
    #[arg(long, value_name = "FILE")]
    pub yaml: Option<PathBuf>,

    /// JSON rules file, used only when no YAML rules are loaded
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Optional TOML server configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8080)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_and_space_forms() {
        let cli = Cli::try_parse_from(["urlshort", "--yaml=rules.yml", "--json", "rules.json"]).unwrap();
        assert_eq!(cli.yaml, Some(PathBuf::from("rules.yml")));
        assert_eq!(cli.json, Some(PathBuf::from("rules.json")));
        assert!(cli.config.is_none());
        assert!(cli.bind.is_none());
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["urlshort"]).unwrap();
        assert!(cli.yaml.is_none());
        assert!(cli.json.is_none());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["urlshort", "--toml=x"]).is_err());
    }
}
