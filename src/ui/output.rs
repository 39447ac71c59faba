use robodeploy::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) {
    for line in render_config_warnings(warnings, supports_unicode) {
        eprintln!("{}", line);
    }
}

fn render_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) -> Vec<String> {
    let icon = Icon::Warning.render(supports_unicode);
    let mut lines = Vec::new();
    for w in warnings {
        match w.line {
            Some(line) => lines.push(format!(
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => lines.push(format!(
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }
    lines
}
