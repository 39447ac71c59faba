//! Reusable test content.

pub const DEFAULT_USER: &str = "booster";
pub const DEFAULT_HOST: &str = "192.168.57.45";
pub const DEFAULT_REMOTE_PATH: &str = "/home/booster/Workspace/robocup_demo";

/// The rsync arguments that precede the source directory.
pub const RSYNC_LEADING_ARGS: &[&str] = &[
    "-avz",
    "--delete",
    "--exclude",
    ".git",
    "--exclude",
    "*.pyc",
    "--exclude",
    "CMakeCache.txt",
    "--exclude",
    "CMakeFiles",
    "--exclude",
    "build",
];

pub const CONFIG_LAB_ROBOT: &str = r#"
[remote]
user = "nao"
host = "10.0.0.7"
path = "~/deploy/robocup"
"#;

pub const CONFIG_WITH_TYPO: &str = r#"
[remote]
hots = "10.0.0.7"
"#;

pub const CONFIG_INVALID: &str = r#"
[remote
user = "nao"
"#;

pub const CONFIG_ABSOLUTE_SCRIPT: &str = r#"
[build]
script = "/opt/robot/build.sh"
"#;

pub const CONFIG_EMPTY_SCRIPT: &str = r#"
[build]
script = ""
"#;
