use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result, bail};

use crate::utils::command::Command;
use crate::utils::error_messages;
use crate::utils::log::{emit_command, is_sink_set};
use crate::utils::which::which;
use crate::{log_info, log_warn};

/// Spawn a child process and wait for it.
///
/// - When a log sink is set: route stdout lines as Info and stderr lines as Warn.
///   Stdin is set to null so prompts fail fast instead of hanging.
/// - Without a sink: inherit stdio so the package manager can talk to the terminal.
pub fn run_child_process(command: &Command) -> Result<ExitStatus> {
  let program = which(&command.program).unwrap_or_else(|| PathBuf::from(&command.program));
  log::debug!("spawn {} in {}", program.display(), command.cwd.display());

  let mut cmd = std::process::Command::new(&program);
  cmd.current_dir(&command.cwd).args(&command.args);

  if is_sink_set() {
    cmd
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped());

    let mut child = cmd
      .spawn()
      .with_context(|| format!("failed to spawn {}", command.program))?;
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let stdout_handle = stdout.map(|out| {
      std::thread::spawn(move || {
        for line in BufReader::new(out).lines().map_while(std::result::Result::ok) {
          log_info!("{}", line);
        }
      })
    });
    let stderr_handle = stderr.map(|err| {
      std::thread::spawn(move || {
        for line in BufReader::new(err).lines().map_while(std::result::Result::ok) {
          log_warn!("{}", line);
        }
      })
    });

    let status = child.wait()?;
    if let Some(h) = stdout_handle {
      let _ = h.join();
    }
    if let Some(h) = stderr_handle {
      let _ = h.join();
    }
    Ok(status)
  } else {
    cmd
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit());
    cmd
      .status()
      .with_context(|| format!("failed to spawn {}", command.program))
  }
}

/// Announce `command`, run it and fail on a non-zero exit status.
pub fn run_checked(command: &Command) -> Result<()> {
  let display = command.to_string();
  emit_command(&display);
  let status = run_child_process(command)?;
  if !status.success() {
    bail!(error_messages::command_failed(&display, status));
  }
  Ok(())
}
