#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use tempfile::{Builder, TempDir};

/// Default `vite.config.js` produced by `npm create vite@latest -- --template react`.
pub const VITE_CONFIG_JS: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

// https://vite.dev/config/
export default defineConfig({
  plugins: [react()],
})
"#;

// Records its argv and mimics the parts of `npm create vite` the tool relies on.
// FAKE_NPM_FAIL: argv (joined by spaces) that should exit 1.
// FAKE_NPM_BARE: when set, `create` only makes an empty project directory.
const FAKE_NPM: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> "$FAKE_NPM_LOG"
if [ -n "$FAKE_NPM_FAIL" ] && [ "$*" = "$FAKE_NPM_FAIL" ]; then
  echo "npm ERR! simulated failure" 1>&2
  exit 1
fi
if [ "$1" = "create" ]; then
  name="$3"
  mkdir -p "$name"
  if [ -n "$FAKE_NPM_BARE" ]; then
    exit 0
  fi
  mkdir -p "$name/src"
  cp "$FAKE_NPM_VITE_CONFIG" "$name/vite.config.js"
  printf ':root { color: red; }\n' > "$name/src/index.css"
  printf '// vite main\n' > "$name/src/main.jsx"
  printf '// vite app\n' > "$name/src/App.jsx"
fi
exit 0
"#;

#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = Builder::new()
      .prefix("create-react-fast-test-")
      .tempdir()
      .expect("temp dir");
    let env = Self { temp };
    for dir in [env.bin_dir(), env.xdg_home_dir()] {
      fs::create_dir_all(&dir).expect("create test dir");
    }
    if let Err(err) = env.install_fake_npm() {
      panic!("prepare fake npm failed: {err}");
    }
    env
  }

  /// Invocation directory of the tool.
  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn bin_dir(&self) -> PathBuf {
    self.temp.path().join(".bin")
  }

  pub fn xdg_home_dir(&self) -> PathBuf {
    self.temp.path().join(".xdg")
  }

  pub fn npm_log_path(&self) -> PathBuf {
    self.temp.path().join(".npm-calls.log")
  }

  fn vite_config_fixture(&self) -> PathBuf {
    self.temp.path().join(".vite.config.fixture.js")
  }

  fn install_fake_npm(&self) -> Result<()> {
    use std::os::unix::fs::PermissionsExt as _;
    let npm = self.bin_dir().join("npm");
    fs::write(&npm, FAKE_NPM)?;
    fs::set_permissions(&npm, fs::Permissions::from_mode(0o755))?;
    fs::write(self.vite_config_fixture(), VITE_CONFIG_JS)?;
    Ok(())
  }

  /// Command for the binary with the fake npm first on PATH and an isolated
  /// XDG config home.
  pub fn bin_cmd(&self) -> Result<Command> {
    let path_value = match std::env::var("PATH") {
      Ok(existing) if !existing.is_empty() => {
        format!("{}:{existing}", self.bin_dir().display())
      }
      _ => self.bin_dir().display().to_string(),
    };
    let mut cmd = Command::cargo_bin("create-react-fast")?;
    cmd
      .current_dir(self.path())
      .env("PATH", path_value)
      .env("XDG_CONFIG_HOME", self.xdg_home_dir())
      .env("FAKE_NPM_LOG", self.npm_log_path())
      .env("FAKE_NPM_VITE_CONFIG", self.vite_config_fixture())
      .env_remove("FAKE_NPM_FAIL")
      .env_remove("FAKE_NPM_BARE")
      .env_remove("RUST_LOG");
    Ok(cmd)
  }

  /// Argument lists the fake npm received, one entry per invocation.
  pub fn npm_calls(&self) -> Vec<String> {
    fs::read_to_string(self.npm_log_path())
      .map(|s| s.lines().map(str::to_string).collect())
      .unwrap_or_default()
  }

  pub fn write_global_config(&self, body: &str) -> Result<()> {
    let dir = self.xdg_home_dir().join("create-react-fast");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("config.toml"), body)?;
    Ok(())
  }

  pub fn write_local_config(&self, body: &str) -> Result<()> {
    fs::write(self.path().join(".create-react-fast.toml"), body)?;
    Ok(())
  }

  pub fn read_project_file(&self, project: &str, rel: &str) -> Result<String> {
    Ok(fs::read_to_string(self.path().join(project).join(rel))?)
  }
}

/// Sorted, `/`-separated paths of all files below `dir`.
pub fn list_files(dir: &Path) -> Vec<String> {
  fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
      return;
    };
    for entry in entries.flatten() {
      let path = entry.path();
      if path.is_dir() {
        walk(base, &path, out);
      } else if let Ok(rel) = path.strip_prefix(base) {
        let parts: Vec<String> = rel
          .components()
          .map(|c| c.as_os_str().to_string_lossy().into_owned())
          .collect();
        out.push(parts.join("/"));
      }
    }
  }
  let mut out = Vec::new();
  walk(dir, dir, &mut out);
  out.sort();
  out
}
