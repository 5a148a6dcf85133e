/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to highlight
/// values such as paths and commands inside info messages.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;

  pub fn name(value: impl Display) -> String {
    format!("{}", value.to_string().magenta())
  }

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  pub fn cmd(c: impl Display) -> String {
    format!("{}", c.to_string().bright_cyan().bold())
  }

  pub fn ok(s: impl Display) -> String {
    format!("{}", s.to_string().green())
  }

  pub fn warn(s: impl Display) -> String {
    format!("{}", s.to_string().yellow())
  }

  pub fn err(s: impl Display) -> String {
    format!("{}", s.to_string().red())
  }
}

// Routed logging: when a sink is set, macros emit events to it; otherwise print.
// info = neutral, success/warn/error = full-line tint.

use crossbeam_channel::Sender;
use owo_colors::OwoColorize as _;
use parking_lot::Mutex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Info,
  Success,
  Warn,
  Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
  /// An external command about to run, rendered as "Running: npm install"
  Command(String),
  /// A single log line preserving ANSI styling
  Line { level: LogLevel, ansi: String },
}

static SINK: Mutex<Option<Sender<LogEvent>>> = Mutex::new(None);

pub fn set_log_sink(sender: Sender<LogEvent>) {
  *SINK.lock() = Some(sender);
}

pub fn clear_log_sink() {
  *SINK.lock() = None;
}

/// Returns true when a log sink is currently registered
pub fn is_sink_set() -> bool {
  SINK.lock().is_some()
}

pub(crate) fn emit(level: LogLevel, text: String) {
  if let Some(tx) = SINK.lock().clone() {
    let _ = tx.send(LogEvent::Line { level, ansi: text });
  } else {
    match level {
      LogLevel::Info | LogLevel::Success => anstream::println!("{}", text),
      LogLevel::Warn | LogLevel::Error => anstream::eprintln!("{}", text),
    }
  }
}

/// Announce an external command before it runs.
pub fn emit_command(display: &str) {
  if let Some(tx) = SINK.lock().clone() {
    let _ = tx.send(LogEvent::Command(display.to_string()));
  } else {
    anstream::println!();
    anstream::println!("{} {}", "▶ Running:".dimmed(), t::cmd(display));
  }
}

#[macro_export]
macro_rules! log_info {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Info,
      format!($fmt $(, $args )*)
    );
  }};
}

#[macro_export]
macro_rules! log_success {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Success,
      $crate::utils::log::t::ok(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_warn {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Warn,
      $crate::utils::log::t::warn(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_error {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Error,
      $crate::utils::log::t::err(format!($fmt $(, $args )*))
    );
  }};
}
