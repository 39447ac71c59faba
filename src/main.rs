//! robodeploy CLI - mirror the project onto the robot and build it there
//!
//! Usage: robodeploy [OPTIONS]
//!
//! With no options: rsync the project to booster@192.168.57.45 and run
//! `scripts/build.sh` there. Exits with the first failing command's code.

mod commands;
mod ui;

use clap::Parser;
use robodeploy::infrastructure::JsonEventSink;
use robodeploy::presentation::Cli;
use robodeploy::DeployError;

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;

fn main() {
    let cli = Cli::parse();

    let code = match commands::deploy::cmd_deploy(&cli) {
        Ok(code) => code,
        Err(err) => {
            let code = exit_code_for(&err);
            if cli.json {
                JsonEventSink::stdout().error(&format!("{:#}", err), code);
            } else {
                let unicode = detect_capabilities().supports_unicode;
                eprintln!("{} Error: {:#}", Icon::Error.render(unicode), err);
            }
            code
        }
    };

    std::process::exit(code);
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .unwrap_or(1)
}
