use anyhow::{Result, bail};

use crate::config::AppContext;
use crate::log_info;
use crate::scaffold::{configure_entry_point, configure_styles, configure_vite, write_templates};
use crate::texts::summary::{next_steps_lines, welcome_lines};
use crate::utils::child::run_checked;
use crate::utils::command::{CmdCtx, Command, expand_argv};
use crate::utils::error_messages;
use crate::utils::log::t;
use crate::utils::which::which;

pub fn run(ctx: &AppContext) -> Result<()> {
  for line in welcome_lines(&ctx.name) {
    log_info!("{}", line);
  }

  let pm = &ctx.config.package_manager.cmd;
  let program = ctx.config.package_manager_program();
  if pm.is_empty() {
    bail!(error_messages::PACKAGE_MANAGER_EMPTY);
  }
  let Some(resolved) = which(program) else {
    bail!(error_messages::package_manager_not_found(program));
  };
  log::debug!("package manager resolved to {}", resolved.display());

  let cmd_ctx = CmdCtx::new(&ctx.name, ctx.paths.root());

  // Skeleton: created next to us, not inside the (not yet existing) root
  let create_args = expand_argv(&ctx.config.scaffold.create, &cmd_ctx);
  run_checked(&Command::new(pm, &create_args, ctx.paths.cwd())?)?;

  let root = ctx.paths.root();
  if !root.is_dir() {
    bail!(error_messages::project_dir_missing(root.display()));
  }
  log_info!("Working in {}", t::path(root.display()));

  for step in &ctx.config.install.steps {
    let args = expand_argv(step, &cmd_ctx);
    run_checked(&Command::new(pm, &args, root)?)?;
  }

  log_info!("");
  configure_vite(&ctx.paths)?;
  configure_styles(&ctx.paths)?;
  write_templates(&ctx.paths)?;
  configure_entry_point(&ctx.paths)?;

  for line in next_steps_lines(&ctx.name, program) {
    log_info!("{}", line);
  }
  Ok(())
}
