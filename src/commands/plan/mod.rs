//! Implementation of the `spektacular plan` command.
//!
//! Hands a specification to the configured agent and drives the
//! question/answer session until the agent returns a plan, which is written
//! to `.spektacular/plans/<spec-stem>/plan.md`.

mod observer;


pub use observer::{BatchObserver, TerminalObserver};

use crate::cli::PlanArgs;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::{Result, SpektError};
use crate::fs::atomic_write_file;
use crate::runner::prompt::planner_system_prompt;
use crate::runner::{RunOptions, Runner, build_prompt, new_runner};
use crate::session::{SessionObserver, run_session};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the generated plan inside its plan directory.
pub const PLAN_FILE: &str = "plan.md";

/// Execute the `spektacular plan` command.
pub fn cmd_plan(args: PlanArgs) -> Result<()> {
    let ctx = ProjectContext::resolve()?;
    let config = Config::load_or_default(ctx.config_path())?;
    let runner = new_runner(&config.agent)?;

    let plan_path = if args.non_interactive {
        let mut observer = BatchObserver::new(io::stdout());
        plan_spec(&ctx, &config, runner.as_ref(), &args.spec_file, args.debug, &mut observer)?
    } else {
        let mut observer = TerminalObserver::new(io::stdin().lock(), io::stdout());
        plan_spec(&ctx, &config, runner.as_ref(), &args.spec_file, args.debug, &mut observer)?
    };

    println!();
    println!("Plan generated: {}", plan_path.display());
    Ok(())
}

/// Run a planning session for `spec_file` and write the resulting plan.
///
/// Raw agent output is captured when `debug` is set or `debug.enabled` is on
/// in the config.
pub fn plan_spec(
    ctx: &ProjectContext,
    config: &Config,
    runner: &dyn Runner,
    spec_file: &Path,
    debug: bool,
    observer: &mut dyn SessionObserver,
) -> Result<PathBuf> {
    let spec = fs::read_to_string(spec_file).map_err(|e| {
        SpektError::UserError(format!(
            "failed to read spec file '{}': {}",
            spec_file.display(),
            e
        ))
    })?;

    let plan_dir = ctx.plan_dir(spec_file);
    let label = plan_dir
        .file_name()
        .map(|name| format!("plan-{}", name.to_string_lossy()))
        .unwrap_or_else(|| "plan".to_string());

    let mut options = RunOptions::new(build_prompt(&spec), config.agent.clone())
        .with_system_prompt(planner_system_prompt())
        .with_cwd(&ctx.root)
        .with_label(label);
    if debug || config.debug.enabled {
        options = options.with_debug_log_dir(ctx.resolve_path(&config.debug.log_dir));
    }

    tracing::info!(spec = %spec_file.display(), runner = %config.agent.command, "planning");
    let plan = run_session(runner, options, config.session.max_turns, observer)?;

    let plan_path = plan_dir.join(PLAN_FILE);
    atomic_write_file(&plan_path, &plan)?;
    Ok(plan_path)
}
