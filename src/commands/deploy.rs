//! Deploy command entry point

use anyhow::{Context, Result};
use robodeploy::config::{load_layered, Config};
use robodeploy::domain::services::resolve_source_root;
use robodeploy::infrastructure::JsonEventSink;
use robodeploy::presentation::{
    apply_cli_overrides, create_deploy_use_case, resolve_deploy_options, Cli,
};
use robodeploy::DeployEventSink;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Run one deployment and return the process exit code.
///
/// `Err` is reserved for failures before or instead of an external
/// command result (config, source resolution, tool not found).
pub fn cmd_deploy(cli: &Cli) -> Result<i32> {
    // The terminal delivers Ctrl+C to rsync/ssh as well; staying alive
    // lets us report the child's exit status instead of dying first.
    ctrlc::set_handler(|| {}).context("failed to install Ctrl+C handler")?;

    let anchor = std::env::current_exe();
    let project_hint = cli.source.clone().or_else(|| {
        anchor
            .as_ref()
            .ok()
            .and_then(|exe| resolve_source_root(exe).ok())
    });

    let loaded = load_layered(cli.config.as_deref(), project_hint.as_deref())?;
    let config = apply_cli_overrides(loaded.config, cli);
    let ui = UiContext::new(cli.json, config.output.verbosity, cli.color, config.output.color);

    // stderr in every mode; in --json mode stdout carries only events.
    print_config_warnings(&loaded.warnings, ui.unicode);
    if ui.shows_debug() {
        match &loaded.path {
            Some(path) => println!("Config: {}", path.display()),
            None => println!("Config: built-in defaults"),
        }
    }

    if cli.print_config {
        print_config(&config, cli.json)?;
        return Ok(0);
    }

    let options = resolve_deploy_options(&config, cli, anchor)?;
    let use_case = create_deploy_use_case(cli.json);

    let sink: Box<dyn DeployEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(ui))
    };

    let outcome = use_case.execute(&options, sink.as_ref())?;
    Ok(outcome.exit_code())
}

fn print_config(config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(config)?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
