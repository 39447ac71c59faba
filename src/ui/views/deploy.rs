use std::path::Path;

use robodeploy::domain::ports::DeployStep;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn step_label(step: DeployStep) -> &'static str {
    match step {
        DeployStep::Sync => "Sync",
        DeployStep::Build => "Remote build",
    }
}

pub fn render_deploy_header(
    source: &Path,
    destination: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "robodeploy (dry run)"
    } else {
        "robodeploy"
    };
    let mut out = format!(
        "{} {}\n",
        Icon::Deploy.colored(supports_color, supports_unicode),
        ColoredText::info(title).bold().render(supports_color)
    );
    out.push_str(&format!("Source: {}\n", source.display()));
    out.push_str(&format!("Remote: {}\n", destination));
    out
}

pub fn render_step_started(step: DeployStep, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match step {
        DeployStep::Sync => Icon::Progress,
        DeployStep::Build => Icon::Remote,
    };
    format!(
        "{} {}...",
        icon.colored(supports_color, supports_unicode),
        step_label(step)
    )
}

pub fn render_command(command: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "  {} {}",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(command).render(supports_color)
    )
}

pub fn render_step_finished(
    step: DeployStep,
    exit_code: i32,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if exit_code == 0 {
        format!(
            "{} {} finished",
            Icon::Success.colored(supports_color, supports_unicode),
            step_label(step)
        )
    } else {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("{} failed (exit code {})", step_label(step), exit_code))
                .render(supports_color)
        )
    }
}

pub fn render_step_skipped(
    step: DeployStep,
    reason: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} skipped: {}",
        Icon::Skipped.colored(supports_color, supports_unicode),
        step_label(step),
        reason
    )
}

pub fn render_deploy_summary(exit_code: i32, supports_color: bool, supports_unicode: bool) -> String {
    if exit_code == 0 {
        format!(
            "\n{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("Deploy complete").bold().render(supports_color)
        )
    } else {
        format!(
            "\n{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("Deploy failed (exit code {})", exit_code))
                .bold()
                .render(supports_color)
        )
    }
}
