use std::path::{Path, PathBuf};

/// Resolve `program` to an executable path by walking PATH entries.
#[must_use]
pub(crate) fn which(program: &str) -> Option<PathBuf> {
  let has_sep = program.contains(std::path::MAIN_SEPARATOR) || program.contains('/');
  if has_sep {
    let candidate = PathBuf::from(program);
    return if is_executable(&candidate) {
      Some(candidate)
    } else {
      None
    };
  }

  let paths = std::env::var_os("PATH")?;
  std::env::split_paths(&paths).find_map(|dir| {
    candidate_names(program)
      .into_iter()
      .map(|name| dir.join(name))
      .find(|candidate| is_executable(candidate))
  })
}

// npm ships as `npm.cmd` on Windows
fn candidate_names(program: &str) -> Vec<String> {
  if cfg!(windows) {
    vec![
      format!("{program}.cmd"),
      format!("{program}.exe"),
      program.to_string(),
    ]
  } else {
    vec![program.to_string()]
  }
}

/// Returns true when `path` points to a regular executable file.
#[must_use]
pub(crate) fn is_executable(path: &Path) -> bool {
  if !path.is_file() {
    return false;
  }
  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt as _;
    std::fs::metadata(path)
      .map(|meta| meta.permissions().mode() & 0o111 != 0)
      .unwrap_or(false)
  }
  #[cfg(not(unix))]
  {
    true
  }
}
