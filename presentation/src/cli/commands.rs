//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-api
#[derive(Parser, Debug)]
#[command(name = "trivia-api")]
#[command(author, version, about = "Trivia questions, categories and quizzes over HTTP")]
#[command(long_about = r#"
trivia-api serves a catalog of trivia questions grouped by category.

Routes:
  GET    /categories                  All categories as an id -> name map
  GET    /questions?page=N            Ten questions per page
  POST   /questions                   Search ({"searchTerm"}) or create a question
  DELETE /questions/{id}              Delete a question
  GET    /categories/{id}/questions   Questions of one category
  POST   /quizzes                     Next random unseen quiz question

Configuration files are loaded from (in priority order):
1. TRIVIA_* environment variables
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-api/config.toml   Global config

Example:
  trivia-api --port 5000
  trivia-api --seed extra-questions.toml -vv
"#)]
pub struct Cli {
    /// Interface to bind (overrides server.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Additional catalog seed file (overrides catalog.seed_file)
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Do not load the built-in categories and questions
    #[arg(long)]
    pub no_default_seed: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["trivia-api"]).unwrap();
        assert!(cli.port.is_none());
        assert!(!cli.no_default_seed);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "trivia-api",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--seed",
            "extra.toml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.seed, Some(PathBuf::from("extra.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["trivia-api", "--port", "99999"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
