//! Common error and warning messages used across the codebase.

use std::fmt::Display;

pub(crate) const PACKAGE_MANAGER_EMPTY: &str = "package_manager.cmd must not be empty";

pub(crate) fn package_manager_not_found(program: impl Display) -> String {
  format!("{program} not found in PATH. Install it first or set package_manager.cmd in your config")
}

pub(crate) fn command_failed(command: impl Display, status: impl Display) -> String {
  format!("`{command}` failed: {status}")
}

pub(crate) fn project_dir_missing(path: impl Display) -> String {
  format!("expected the package manager to create {path}, but it does not exist")
}

pub(crate) fn plugin_list_missing(file: impl Display) -> String {
  format!("Could not find plugins array in {file} to add tailwindcss plugin.")
}

pub(crate) const VITE_CONFIG_MISSING: &str =
  "No vite.config.js/ts found; skipping Tailwind plugin setup.";
pub(crate) const INDEX_CSS_MISSING: &str = "src/index.css not found; skipping Tailwind CSS setup.";
pub(crate) const MAIN_JSX_MISSING: &str = "src/main.jsx not found; skipping Router setup.";
