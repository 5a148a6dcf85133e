//! Inject a plugin into the `plugins: [...]` list of a Vite config.
//!
//! This is a textual patch, not a parser: the first `plugins:` list literal
//! is located with a non-greedy match. A `]` nested inside the list ends the
//! match early, and only the first list in a file is ever touched.

use std::sync::OnceLock;

use regex::Regex;

static PLUGINS_RE: OnceLock<Regex> = OnceLock::new();

fn plugins_re() -> &'static Regex {
  PLUGINS_RE.get_or_init(|| Regex::new(r"(?s)plugins:\s*\[(.*?)\]").expect("valid plugins regex"))
}

/// A Vite plugin to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginPatch {
  /// Module specifier; its presence anywhere in the file means the import exists.
  pub module: &'static str,
  /// Line prepended when the module is not referenced yet.
  pub import: &'static str,
  /// Substring that marks the plugin as already registered in the list.
  pub marker: &'static str,
  /// Expression appended to the plugin list.
  pub invocation: &'static str,
}

pub const TAILWIND_VITE: PluginPatch = PluginPatch {
  module: "@tailwindcss/vite",
  import: "import tailwindcss from \"@tailwindcss/vite\";\n",
  marker: "tailwindcss(",
  invocation: "tailwindcss()",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
  /// The import and/or the registration were added.
  Patched,
  /// Both were already present; the text is unchanged.
  AlreadyPresent,
  /// No `plugins: [...]` list was found; the text is unchanged.
  PluginListMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchResult {
  pub text: String,
  pub outcome: PatchOutcome,
}

impl PluginPatch {
  /// Ensure the import and the plugin registration are present in `source`.
  #[must_use]
  pub fn apply(&self, source: &str) -> PatchResult {
    let Some(caps) = plugins_re().captures(source) else {
      return PatchResult {
        text: source.to_string(),
        outcome: PatchOutcome::PluginListMissing,
      };
    };
    let whole = caps.get(0).expect("group 0 always matches");
    let inner = caps.get(1).map_or("", |m| m.as_str());

    let mut text = String::with_capacity(source.len() + self.import.len() + self.invocation.len() + 2);
    if !source.contains(self.module) {
      text.push_str(self.import);
    }
    text.push_str(&source[..whole.start()]);
    if inner.contains(self.marker) {
      text.push_str(whole.as_str());
    } else {
      text.push_str(&format!("plugins: [{}]", self.extend_list(inner)));
    }
    text.push_str(&source[whole.end()..]);

    let outcome = if text == source {
      PatchOutcome::AlreadyPresent
    } else {
      PatchOutcome::Patched
    };
    PatchResult { text, outcome }
  }

  fn extend_list(&self, inner: &str) -> String {
    let trimmed = inner.trim();
    if trimmed.is_empty() {
      self.invocation.to_string()
    } else {
      format!("{trimmed}, {}", self.invocation)
    }
  }
}
