//! File steps applied to the freshly created project.
//!
//! Every function takes the project paths explicitly and reports missing
//! inputs as warnings instead of failing.

pub mod plugin_patch;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::ProjectPaths;
use crate::texts::templates::{DIRECTORIES, INDEX_CSS, MAIN_JSX, TEMPLATE_FILES};
use crate::utils::error_messages;
use crate::{log_success, log_warn};
use plugin_patch::{PatchOutcome, TAILWIND_VITE};

/// Vite config candidates, in lookup order.
pub const VITE_CONFIG_CANDIDATES: &[&str] = &["vite.config.js", "vite.config.ts"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViteOutcome {
  Patched(PathBuf),
  AlreadyConfigured(PathBuf),
  PluginListMissing(PathBuf),
  Missing,
}

#[must_use]
pub fn find_vite_config(paths: &ProjectPaths) -> Option<PathBuf> {
  VITE_CONFIG_CANDIDATES
    .iter()
    .map(|name| paths.root().join(name))
    .find(|p| p.is_file())
}

/// Register the Tailwind Vite plugin in the project's Vite config.
pub fn configure_vite(paths: &ProjectPaths) -> Result<ViteOutcome> {
  let Some(path) = find_vite_config(paths) else {
    log_warn!("{}", error_messages::VITE_CONFIG_MISSING);
    return Ok(ViteOutcome::Missing);
  };
  let name = file_label(&path);

  let source =
    fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
  let patched = TAILWIND_VITE.apply(&source);
  match patched.outcome {
    PatchOutcome::Patched => {
      write_file(&path, &patched.text)?;
      log_success!("Updated {name} with @tailwindcss/vite plugin");
      Ok(ViteOutcome::Patched(path))
    }
    PatchOutcome::AlreadyPresent => {
      log_success!("{name} already uses @tailwindcss/vite");
      Ok(ViteOutcome::AlreadyConfigured(path))
    }
    PatchOutcome::PluginListMissing => {
      log_warn!("{}", error_messages::plugin_list_missing(&name));
      Ok(ViteOutcome::PluginListMissing(path))
    }
  }
}

/// Overwrite `src/index.css` with the Tailwind stylesheet. Returns false when
/// the file does not exist.
pub fn configure_styles(paths: &ProjectPaths) -> Result<bool> {
  let path = paths.src_dir().join("index.css");
  if !path.is_file() {
    log_warn!("{}", error_messages::INDEX_CSS_MISSING);
    return Ok(false);
  }
  write_file(&path, INDEX_CSS)?;
  log_success!("Updated src/index.css with Tailwind v4 import and base styles");
  Ok(true)
}

/// Create the routes/layouts/pages directories and write every template.
pub fn write_templates(paths: &ProjectPaths) -> Result<Vec<PathBuf>> {
  for dir in DIRECTORIES {
    let dir = paths.project_file(dir);
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
  }

  let mut written = Vec::with_capacity(TEMPLATE_FILES.len());
  for file in TEMPLATE_FILES {
    let path = paths.project_file(file.path);
    write_file(&path, file.contents)?;
    log_success!("Created {}", file.path);
    written.push(path);
  }
  Ok(written)
}

/// Overwrite `src/main.jsx` with the BrowserRouter bootstrap. Returns false
/// when the file does not exist.
pub fn configure_entry_point(paths: &ProjectPaths) -> Result<bool> {
  let path = paths.src_dir().join("main.jsx");
  if !path.is_file() {
    log_warn!("{}", error_messages::MAIN_JSX_MISSING);
    return Ok(false);
  }
  write_file(&path, MAIN_JSX)?;
  log_success!("Updated src/main.jsx with BrowserRouter and AppRoutes");
  Ok(true)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
  log::debug!("write {}", path.display());
  fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn file_label(path: &Path) -> String {
  path
    .file_name()
    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
