use anyhow::Result;
use clap::Parser;

mod commands;
pub mod config;
pub mod scaffold;
pub mod texts;
pub mod utils;

use crate::config::{AppContext, ProjectPaths, load_config};

/// Scaffold a Vite + React app with Tailwind CSS v4, React Router and Axios.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Name of the project directory to create [default: my-react-app]
  pub name: Option<String>,
}

pub fn parse() -> Cli {
  Cli::parse()
}

pub fn run() -> Result<()> {
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .format_timestamp(None)
    .try_init();

  let cli = parse();
  let cwd = std::env::current_dir()?;
  let config = load_config(&cwd)?;

  let name = cli.name.unwrap_or_else(|| config.default_name.clone());
  let paths = ProjectPaths::new(cwd, &name)?;
  let ctx = AppContext {
    name,
    paths,
    config,
  };

  commands::create::run(&ctx)
}
