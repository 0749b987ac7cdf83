//! Common test utilities for scully-deploy CLI tests.
//!
//! `TestEnv` provides an isolated project directory, a `bin/` directory of
//! fake `npm`, `yarn` and `git` executables that append their arguments to
//! a log file, and a `GITHUB_OUTPUT` file.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Variables the CLI reads; cleared so the host CI cannot leak into tests
const CLEARED_VARS: &[&str] = &[
    "INPUT_ACCESS-TOKEN",
    "INPUT_DEPLOY-BRANCH",
    "INPUT_BUILD-ARGS",
    "INPUT_SCULLY-ARGS",
    "GITHUB_REF",
    "GITHUB_SHA",
    "GITHUB_ACTOR",
    "GITHUB_REPOSITORY",
    "GITHUB_SERVER_URL",
    "GITHUB_OUTPUT",
    "GITHUB_ACTIONS",
    "RUST_LOG",
];

pub const SHA: &str = "0123456789abcdef0123456789abcdef01234567";

pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            root: tempfile::tempdir().unwrap(),
        };
        std::fs::create_dir_all(env.project_path("")).unwrap();
        std::fs::create_dir_all(env.bin_dir()).unwrap();
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root.path().join("project").join(relative)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.path().join("commands.log")
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Logged invocations, one `program args...` line each
    pub fn commands(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn github_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).unwrap_or_default()
    }

    /// Install a fake tool; `extra` is shell run after logging
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, extra: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir().join(name);
        let script = format!(
            "#!/bin/sh\necho \"{} $*\" >> \"$SCULLY_DEPLOY_TEST_LOG\"\n{}\n",
            name, extra
        );
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Fake npm/yarn/git where `run scully` creates the output directory
    #[cfg(unix)]
    pub fn install_default_tools(&self) {
        let scully = "if [ \"$1\" = run ] && [ \"$2\" = scully ]; then mkdir -p dist/static; fi";
        self.install_tool("npm", scully);
        self.install_tool("yarn", scully);
        self.install_tool("git", "");
    }

    pub fn run(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_scully-deploy"));
        for var in CLEARED_VARS {
            cmd.env_remove(var);
        }

        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.bin_dir()];
        paths.extend(std::env::split_paths(&path));

        cmd.arg("--project-root")
            .arg(self.project_path(""))
            .args(args)
            .env("PATH", std::env::join_paths(paths).unwrap())
            .env("SCULLY_DEPLOY_TEST_LOG", self.log_path())
            .env("GITHUB_OUTPUT", self.output_path())
            .envs(env_vars.iter().copied())
            .current_dir(self.root.path());

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// GitHub context for a push to `develop` in `octo/site`
pub fn github_env(git_ref: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("GITHUB_REF", git_ref),
        ("GITHUB_SHA", SHA),
        ("GITHUB_ACTOR", "monalisa"),
        ("GITHUB_REPOSITORY", "octo/site"),
        ("GITHUB_SERVER_URL", "https://github.com"),
    ]
}

pub fn package_lock(version: &str) -> String {
    format!(
        r#"{{
  "name": "site",
  "lockfileVersion": 1,
  "requires": true,
  "dependencies": {{
    "@scullyio/scully": {{ "version": "{}" }}
  }}
}}"#,
        version
    )
}
