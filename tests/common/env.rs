//! Test environment builder for isolated robodeploy runs.
//!
//! `TestEnv` owns a temp project, a temp HOME and a `bin/` directory with
//! fake `rsync` and `ssh` scripts. The fakes record their argv (one
//! argument per line) and exit with a configurable code. PATH is set to
//! the fake `bin/` only, so the real tools are never reached.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the robodeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    /// Temporary directory holding the project tree
    pub root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    bin_dir: PathBuf,
    log_dir: PathBuf,
    robodeploy_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// The project directory (canonical).
    pub fn project(&self) -> PathBuf {
        fs::canonicalize(self.root.path().join("project")).expect("project dir exists")
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn write_home_file(&self, relative: &str, content: &str) {
        write_file(&self.home_path(relative), content);
    }

    /// Remove a fake tool so spawning it fails.
    pub fn remove_tool(&self, name: &str) {
        fs::remove_file(self.bin_dir.join(name)).expect("Failed to remove fake tool");
    }

    /// Arguments the fake tool was last called with, or `None` if it never ran.
    pub fn tool_args(&self, name: &str) -> Option<Vec<String>> {
        let log = self.log_dir.join(format!("{}.args", name));
        let content = fs::read_to_string(log).ok()?;
        Some(content.lines().map(str::to_string).collect())
    }

    /// Run robodeploy against this project via `--source`.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run robodeploy with `--source` and extra env vars
    /// (e.g. `FAKE_RSYNC_EXIT`, `ROBODEPLOY_HOST`).
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let project = self.project();
        let mut full: Vec<&str> = vec!["--source", project.to_str().expect("utf-8 temp path")];
        full.extend_from_slice(args);
        self.run_binary(&self.robodeploy_bin, &full, env_vars)
    }

    /// Run a given copy of the binary without injecting `--source`.
    pub fn run_binary(&self, bin: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("PATH", &self.bin_dir)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("FAKE_TOOL_LOG", &self.log_dir)
            .env("NO_COLOR", "1")
            .env_remove("ROBODEPLOY_USER")
            .env_remove("ROBODEPLOY_HOST")
            .env_remove("ROBODEPLOY_REMOTE_PATH")
            .env_remove("ROBODEPLOY_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute robodeploy");
        output_to_result(output)
    }

    /// Install a copy of the binary at `<project>/scripts/robodeploy`,
    /// the layout the tool uses to find its project on its own.
    pub fn install_into_project(&self) -> PathBuf {
        let dest = self.project_path("scripts/robodeploy");
        fs::create_dir_all(dest.parent().expect("has parent")).expect("Failed to create scripts/");
        fs::copy(&self.robodeploy_bin, &dest).expect("Failed to copy robodeploy binary");
        dest
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Shell script standing in for `rsync` or `ssh`.
fn fake_tool_script(name: &str, exit_var: &str) -> String {
    format!(
        r#"#!/bin/sh
log="$FAKE_TOOL_LOG/{name}.args"
: > "$log"
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$log"
done
exit "${{{exit_var}:-0}}"
"#
    )
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    project_files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            project_files: vec![
                ("src/main.cpp".to_string(), "int main() { return 0; }\n".to_string()),
                ("scripts/build.sh".to_string(), "#!/bin/sh\nmake\n".to_string()),
            ],
        }
    }

    pub fn with_project_file(mut self, relative: &str, content: &str) -> Self {
        self.project_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");

        let project = root.path().join("project");
        fs::create_dir_all(&project).expect("Failed to create project dir");
        for (relative, content) in &self.project_files {
            write_file(&project.join(relative), content);
        }

        let bin_dir = root.path().join("bin");
        let log_dir = root.path().join("log");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        fs::create_dir_all(&log_dir).expect("Failed to create log dir");

        for (name, exit_var) in [("rsync", "FAKE_RSYNC_EXIT"), ("ssh", "FAKE_SSH_EXIT")] {
            let path = bin_dir.join(name);
            fs::write(&path, fake_tool_script(name, exit_var)).expect("Failed to write fake tool");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark fake tool executable");
        }

        TestEnv {
            root,
            home_dir,
            bin_dir,
            log_dir,
            robodeploy_bin: PathBuf::from(env!("CARGO_BIN_EXE_robodeploy")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
