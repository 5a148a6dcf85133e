use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::utils::error_messages;

/// Values substituted into configured argv templates.
/// - `<name>` expands to the project name.
/// - `<root>` expands to the absolute project root.
#[derive(Debug, Clone)]
pub struct CmdCtx {
  pub name: String,
  pub root: PathBuf,
}

impl CmdCtx {
  pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
    Self {
      name: name.into(),
      root: root.into(),
    }
  }
}

/// Expand `<name>` and `<root>` placeholders in every argv token.
pub fn expand_argv(argv: &[String], ctx: &CmdCtx) -> Vec<String> {
  let root = ctx.root.display().to_string();
  argv
    .iter()
    .map(|raw| raw.replace("<name>", &ctx.name).replace("<root>", &root))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
  pub program: String,
  pub args: Vec<String>,
  pub cwd: PathBuf,
}

impl Command {
  /// Build a command from the package manager prefix plus step arguments.
  /// The first element of `prefix` is the program.
  pub fn new(prefix: &[String], args: &[String], cwd: &Path) -> Result<Self> {
    let Some((program, rest)) = prefix.split_first() else {
      bail!(error_messages::PACKAGE_MANAGER_EMPTY);
    };
    if program.trim().is_empty() {
      bail!(error_messages::PACKAGE_MANAGER_EMPTY);
    }
    let mut all_args = rest.to_vec();
    all_args.extend_from_slice(args);
    Ok(Self {
      program: program.clone(),
      args: all_args,
      cwd: cwd.to_path_buf(),
    })
  }
}

impl fmt::Display for Command {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.program)?;
    for arg in &self.args {
      if arg.is_empty() || arg.contains(char::is_whitespace) {
        write!(f, " \"{arg}\"")?;
      } else {
        write!(f, " {arg}")?;
      }
    }
    Ok(())
  }
}
