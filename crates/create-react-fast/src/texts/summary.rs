use owo_colors::OwoColorize as _;

use crate::utils::log::t;

fn highlight_name() -> String {
  "React + Vite + Tailwind v4 + Router".bright_cyan().bold().to_string()
}

pub fn welcome_lines(project_name: &str) -> Vec<String> {
  vec![
    String::new(),
    format!("🚀 {} Quick Starter", highlight_name()),
    format!("📁 Project name: {}", t::name(project_name)),
    format!(
      "ℹ️  When Vite asks '{}', choose {}.",
      "Install with npm and start now?",
      "No".bold()
    ),
    String::new(),
  ]
}

pub fn next_steps_lines(project_name: &str, package_manager: &str) -> Vec<String> {
  vec![
    String::new(),
    format!("🎉 {}", "Setup complete!".green().bold()),
    String::new(),
    "Next steps:".to_string(),
    format!("  {}", t::cmd(format!("cd {project_name}"))),
    format!("  {}", t::cmd(format!("{package_manager} run dev"))),
    String::new(),
    "You now have:".to_string(),
    "  - React + Vite".to_string(),
    "  - Tailwind CSS v4 (via @tailwindcss/vite)".to_string(),
    "  - React Router with basic pages".to_string(),
    "  - Axios installed for API calls".to_string(),
  ]
}
