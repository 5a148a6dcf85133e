use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize as _;
use serde::Deserialize;
use toml::Value as TomlValue;

/// Known top-level config keys.
const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["default_name", "package_manager", "scaffold", "install"];

/// Known keys within `[package_manager]`.
const KNOWN_PACKAGE_MANAGER_KEYS: &[&str] = &["cmd"];

/// Known keys within `[scaffold]`.
const KNOWN_SCAFFOLD_KEYS: &[&str] = &["create"];

/// Known keys within `[install]`.
const KNOWN_INSTALL_KEYS: &[&str] = &["steps"];

const APP_NAME: &str = "create-react-fast";

/// File name of the global config below `$XDG_CONFIG_HOME/create-react-fast/`.
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// File name of the per-directory config read from the invocation directory.
pub const LOCAL_CONFIG_FILE: &str = ".create-react-fast.toml";

// Embed repository defaults
const DEFAULT_TOML: &str = include_str!(concat!(
  env!("CARGO_MANIFEST_DIR"),
  "/defaults/create-react-fast.toml"
));

/// Resolve the global config file path.
///
/// # Errors
/// Returns an error if the XDG config home cannot be resolved.
pub fn global_config_path() -> Result<PathBuf> {
  let xdg = xdg::BaseDirectories::with_prefix(APP_NAME);
  let config_home = xdg
    .get_config_home()
    .ok_or_else(|| anyhow::anyhow!("unable to resolve XDG config home"))?;
  Ok(config_home.join(GLOBAL_CONFIG_FILE))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManagerConfig {
  /// Program plus leading arguments, e.g. `["npm"]` or `["corepack", "pnpm"]`.
  #[serde(default)]
  pub cmd: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldStepConfig {
  /// Arguments for the skeleton creation step. Supports `<name>`.
  #[serde(default)]
  pub create: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstallConfig {
  /// One argv per install call, run inside the project root.
  #[serde(default)]
  pub steps: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldConfig {
  #[serde(default)]
  pub default_name: String,
  #[serde(default)]
  pub package_manager: PackageManagerConfig,
  #[serde(default)]
  pub scaffold: ScaffoldStepConfig,
  #[serde(default)]
  pub install: InstallConfig,
}

impl ScaffoldConfig {
  /// Program name of the package manager, used in messages.
  #[must_use]
  pub fn package_manager_program(&self) -> &str {
    self
      .package_manager
      .cmd
      .first()
      .map_or("npm", String::as_str)
  }
}

/// Explicit base directories for every step. Nothing changes the process
/// working directory; child commands and file writes use these paths.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
  cwd: PathBuf,
  root: PathBuf,
}

impl ProjectPaths {
  pub fn new(cwd: impl Into<PathBuf>, name: &str) -> Result<Self> {
    if name.trim().is_empty() {
      bail!("project name must not be empty");
    }
    let cwd = cwd.into();
    let root = cwd.join(name);
    Ok(Self { cwd, root })
  }

  /// Directory the tool was invoked from; the skeleton is created here.
  #[must_use]
  pub fn cwd(&self) -> &PathBuf {
    &self.cwd
  }

  /// The generated project directory.
  #[must_use]
  pub fn root(&self) -> &PathBuf {
    &self.root
  }

  #[must_use]
  pub fn src_dir(&self) -> PathBuf {
    self.root.join("src")
  }

  /// Join a `/`-separated path relative to the project root.
  #[must_use]
  pub fn project_file(&self, rel: &str) -> PathBuf {
    rel
      .split('/')
      .fold(self.root.clone(), |acc, part| acc.join(part))
  }
}

#[derive(Debug, Clone)]
pub struct AppContext {
  pub name: String,
  pub paths: ProjectPaths,
  pub config: ScaffoldConfig,
}

fn merge_values(base: &mut TomlValue, overlay: TomlValue) {
  match (base, overlay) {
    (TomlValue::Table(base_tbl), TomlValue::Table(overlay_tbl)) => {
      for (k, v) in overlay_tbl {
        match base_tbl.get_mut(&k) {
          Some(existing) => merge_values(existing, v),
          None => {
            base_tbl.insert(k, v);
          }
        }
      }
    }
    // Arrays and scalars: replace last-wins
    (base_slot, new_v) => *base_slot = new_v,
  }
}

fn warn_unknown_section_keys(table: &toml::Table, section: &str, known: &[&str], file_path: &Path) {
  let Some(TomlValue::Table(inner)) = table.get(section) else {
    return;
  };
  for key in inner.keys() {
    if !known.contains(&key.as_str()) {
      anstream::eprintln!(
        "{}: unknown config key '{}.{}' in {} (known keys: {})",
        "warning".yellow(),
        section,
        key,
        file_path.display(),
        known.join(", ")
      );
    }
  }
}

/// Warn about unknown keys in a parsed TOML config file so typos surface.
fn warn_unknown_keys(val: &TomlValue, file_path: &Path) {
  let TomlValue::Table(table) = val else {
    return;
  };

  for key in table.keys() {
    if !KNOWN_TOP_LEVEL_KEYS.contains(&key.as_str()) {
      anstream::eprintln!(
        "{}: unknown config key '{}' in {} (did you mean one of: {}?)",
        "warning".yellow(),
        key,
        file_path.display(),
        KNOWN_TOP_LEVEL_KEYS.join(", ")
      );
    }
  }

  warn_unknown_section_keys(table, "package_manager", KNOWN_PACKAGE_MANAGER_KEYS, file_path);
  warn_unknown_section_keys(table, "scaffold", KNOWN_SCAFFOLD_KEYS, file_path);
  warn_unknown_section_keys(table, "install", KNOWN_INSTALL_KEYS, file_path);
}

fn read_overlay(path: &Path) -> Result<TomlValue> {
  let data =
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let val: TomlValue =
    toml::from_str(&data).with_context(|| format!("invalid TOML in {}", path.display()))?;
  warn_unknown_keys(&val, path);
  Ok(val)
}

/// Load and merge configuration from defaults, global, and local files.
///
/// # Errors
/// Returns an error if any of the config files cannot be read or parsed
/// as valid TOML, or if the merged config does not match the schema.
pub fn load_config(cwd: &Path) -> Result<ScaffoldConfig> {
  let mut merged: TomlValue =
    toml::from_str(DEFAULT_TOML).context("invalid embedded default config")?;

  let xdg = xdg::BaseDirectories::with_prefix(APP_NAME);
  if let Some(global_path) = xdg.find_config_file(GLOBAL_CONFIG_FILE) {
    log::debug!("merging global config {}", global_path.display());
    merge_values(&mut merged, read_overlay(&global_path)?);
  }

  let local_cfg = cwd.join(LOCAL_CONFIG_FILE);
  if local_cfg.exists() {
    log::debug!("merging local config {}", local_cfg.display());
    merge_values(&mut merged, read_overlay(&local_cfg)?);
  }

  let cfg: ScaffoldConfig = merged
    .try_into()
    .context("failed to parse merged config")?;
  Ok(cfg)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(s: &str) -> TomlValue {
    toml::from_str(s).unwrap()
  }

  #[test]
  fn embedded_defaults_describe_npm_vite_setup() -> Result<()> {
    let cfg: ScaffoldConfig = parse(DEFAULT_TOML).try_into()?;
    assert_eq!(cfg.default_name, "my-react-app");
    assert_eq!(cfg.package_manager.cmd, vec!["npm"]);
    assert_eq!(
      cfg.scaffold.create,
      vec!["create", "vite@latest", "<name>", "--", "--template", "react"]
    );
    assert_eq!(
      cfg.install.steps,
      vec![
        vec!["install".to_string()],
        vec![
          "install".to_string(),
          "-D".to_string(),
          "tailwindcss".to_string(),
          "@tailwindcss/vite".to_string()
        ],
        vec![
          "install".to_string(),
          "axios".to_string(),
          "react-router-dom".to_string()
        ],
      ]
    );
    Ok(())
  }

  #[test]
  fn overlay_tables_merge_and_arrays_replace() -> Result<()> {
    let mut base = parse(DEFAULT_TOML);
    merge_values(
      &mut base,
      parse("[package_manager]\ncmd = [\"pnpm\"]\n[install]\nsteps = [[\"install\"]]\n"),
    );
    let cfg: ScaffoldConfig = base.try_into()?;
    assert_eq!(cfg.package_manager.cmd, vec!["pnpm"]);
    assert_eq!(cfg.install.steps, vec![vec!["install".to_string()]]);
    // untouched keys survive
    assert_eq!(cfg.default_name, "my-react-app");
    assert_eq!(cfg.scaffold.create[0], "create");
    Ok(())
  }

  #[test]
  fn project_paths_are_joined_onto_cwd() -> Result<()> {
    let paths = ProjectPaths::new("/work", "demo")?;
    assert_eq!(paths.root(), &PathBuf::from("/work/demo"));
    assert_eq!(paths.src_dir(), PathBuf::from("/work/demo/src"));
    assert_eq!(
      paths.project_file("src/pages/Home.jsx"),
      PathBuf::from("/work/demo").join("src").join("pages").join("Home.jsx")
    );
    Ok(())
  }

  #[test]
  fn blank_project_name_is_rejected() {
    let err = ProjectPaths::new("/work", "  ").expect_err("blank name");
    assert!(err.to_string().contains("must not be empty"));
  }

  #[test]
  fn package_manager_program_falls_back_to_npm() {
    let cfg = ScaffoldConfig::default();
    assert_eq!(cfg.package_manager_program(), "npm");
  }
}
