//! Deploy Use Case
//!
//! Runs the deploy sequence, stopping at the first failure:
//! 1. Validate inputs
//! 2. Skip runs triggered by the deploy branch itself
//! 3. Detect the package manager and install dependencies
//! 4. Build the site
//! 5. Resolve the generator version from the lock file
//! 6. Run the generator (with `--nw` for old releases)
//! 7. Copy `CNAME` into the generated site
//! 8. Commit the generated site in a fresh repository
//! 9. Force-push it to the deploy branch
//!
//! Steps already completed are left as they are when a later step fails.

use std::sync::Arc;

use semver::Version;

use crate::domain::policies::apply_no_watch_flag;
use crate::domain::ports::{
    CiEnvironment, CommandRunner, CommandSpec, DeployEvent, DeployEventSink, DeployStep,
    FileSystem, NoopEventSink,
};
use crate::domain::services::{resolve_version, LockfileError, GENERATOR_PACKAGE};
use crate::domain::value_objects::{
    normalize_build_args, normalize_scully_args, split_args, PackageManager, RepoTarget,
    YARN_LOCKFILE,
};
use crate::error::{DeployError, DeployResult};

use super::options::{DeployOptions, RunConfig, CNAME_FILE};
use super::result::{DeployReport, DeployStatus};

/// Fixed part of the deploy commit message; the triggering sha follows it
pub const COMMIT_MESSAGE_PREFIX: &str = "🎩 Scully site deployed";

/// Split arguments for the two tool invocations
struct ToolArgs {
    build: Vec<String>,
    scully: Vec<String>,
}

/// Deploy use case - orchestrates one deploy run
///
/// Parameterized by its ports so tests can substitute fakes for
/// process execution, the file system and the CI context.
pub struct DeployUseCase<CR, FS, CI>
where
    CR: CommandRunner,
    FS: FileSystem,
    CI: CiEnvironment,
{
    runner: CR,
    file_system: FS,
    ci: CI,
    event_sink: Arc<dyn DeployEventSink>,
}

impl<CR, FS, CI> DeployUseCase<CR, FS, CI>
where
    CR: CommandRunner,
    FS: FileSystem,
    CI: CiEnvironment,
{
    pub fn new(runner: CR, file_system: FS, ci: CI) -> Self {
        Self {
            runner,
            file_system,
            ci,
            event_sink: Arc::new(NoopEventSink),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn DeployEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// Execute the deploy run
    pub fn execute(&self, options: &DeployOptions) -> DeployResult<DeployReport> {
        let config = RunConfig::from_options(options)?;

        let context = self.ci.context()?;
        if context.is_deploy_branch(&config.deploy_branch) {
            self.emit(DeployEvent::Skipped {
                git_ref: context.git_ref.clone(),
            });
            return Ok(DeployReport::skipped(config.deploy_branch));
        }

        let args = Self::split_tool_args(&config)?;
        self.emit(DeployEvent::Started {
            git_ref: context.git_ref.clone(),
            deploy_branch: config.deploy_branch.clone(),
        });

        let manager = self.detect_package_manager(&config);
        self.install(&config, manager)?;
        self.build(&config, manager, &args.build)?;

        let version = self.resolve_generator_version(&config, manager)?;
        let no_watch = self.generate(&config, manager, &version, args.scully)?;

        let cname_copied = self.copy_cname(&config)?;

        self.commit(&config, &context.repo)?;
        self.push(&config, &context.repo)?;

        self.emit(DeployEvent::Completed {
            repository: context.repo.slug(),
            deploy_branch: config.deploy_branch.clone(),
        });

        Ok(DeployReport {
            status: DeployStatus::Deployed,
            deploy_branch: config.deploy_branch,
            package_manager: Some(manager),
            generator_version: Some(version),
            no_watch,
            cname_copied,
        })
    }

    /// Normalize and split both argument strings before anything runs
    fn split_tool_args(config: &RunConfig) -> DeployResult<ToolArgs> {
        let build = normalize_build_args(&config.build_args);
        let build = split_args(&build).ok_or_else(|| DeployError::InvalidArguments {
            input: "build-args",
            value: build.clone(),
        })?;

        let scully = normalize_scully_args(&config.scully_args);
        let scully = split_args(&scully).ok_or_else(|| DeployError::InvalidArguments {
            input: "scully-args",
            value: scully.clone(),
        })?;

        Ok(ToolArgs { build, scully })
    }

    fn detect_package_manager(&self, config: &RunConfig) -> PackageManager {
        let manager =
            PackageManager::detect(self.file_system.exists(&config.project_path(YARN_LOCKFILE)));
        self.emit(DeployEvent::PackageManagerDetected { manager });
        manager
    }

    fn install(&self, config: &RunConfig, manager: PackageManager) -> DeployResult<()> {
        let command = CommandSpec::new(manager.program())
            .args(manager.install_args().iter().copied())
            .current_dir(&config.project_root);
        self.run_step(DeployStep::Install, &[command])
    }

    fn build(&self, config: &RunConfig, manager: PackageManager, args: &[String]) -> DeployResult<()> {
        let command = CommandSpec::new(manager.program())
            .args(["run", "build"])
            .args(args.iter().cloned())
            .current_dir(&config.project_root);
        self.run_step(DeployStep::Build, &[command])
    }

    fn resolve_generator_version(
        &self,
        config: &RunConfig,
        manager: PackageManager,
    ) -> DeployResult<Version> {
        let lockfile = config.project_path(manager.lockfile_name());
        let content =
            self.file_system
                .read_to_string(&lockfile)
                .map_err(|source| LockfileError::Read {
                    file: manager.lockfile_name().to_string(),
                    source,
                })?;
        Ok(resolve_version(manager, &content, GENERATOR_PACKAGE)?)
    }

    /// Returns whether the legacy no-watch flag was added
    fn generate(
        &self,
        config: &RunConfig,
        manager: PackageManager,
        version: &Version,
        args: Vec<String>,
    ) -> DeployResult<bool> {
        let base_len = args.len();
        let args = apply_no_watch_flag(args, version);
        let no_watch = args.len() > base_len;
        self.emit(DeployEvent::GeneratorVersionResolved {
            version: version.to_string(),
            no_watch,
        });

        let mut command = CommandSpec::new(manager.program()).args(["run", "scully"]);
        if !args.is_empty() {
            command = command.arg("--").args(args);
        }
        self.run_step(
            DeployStep::Generate,
            &[command.current_dir(&config.project_root)],
        )?;
        Ok(no_watch)
    }

    /// Returns whether a CNAME file was copied
    fn copy_cname(&self, config: &RunConfig) -> DeployResult<bool> {
        let cname = config.project_path(CNAME_FILE);
        if !self.file_system.exists(&cname) {
            return Ok(false);
        }

        let destination = config.output_path().join(CNAME_FILE);
        self.file_system
            .copy(&cname, &destination)
            .map_err(|source| DeployError::CopyCname {
                to: destination.clone(),
                source,
            })?;
        self.emit(DeployEvent::CnameCopied { destination });
        Ok(true)
    }

    fn commit(&self, config: &RunConfig, repo: &RepoTarget) -> DeployResult<()> {
        let out = config.output_path();
        let git = || CommandSpec::new("git").current_dir(&out);
        let commands = [
            git().arg("init"),
            git().args(["config", "user.name"]).arg(repo.actor.as_str()),
            git()
                .args(["config", "user.email"])
                .arg(repo.committer_email()),
            git().args(["add", "."]),
            git()
                .args(["commit", "-m"])
                .arg(format!("{} from {}", COMMIT_MESSAGE_PREFIX, repo.sha)),
        ];
        self.run_step(DeployStep::Commit, &commands)
    }

    fn push(&self, config: &RunConfig, repo: &RepoTarget) -> DeployResult<()> {
        let command = CommandSpec::new("git")
            .args(["push", "--force"])
            .arg(repo.push_url(&config.access_token))
            .arg(format!("HEAD:{}", config.deploy_branch))
            .current_dir(config.output_path());
        self.run_step(DeployStep::Push, &[command])
    }

    fn run_step(&self, step: DeployStep, commands: &[CommandSpec]) -> DeployResult<()> {
        self.emit(DeployEvent::StepStarted { step });
        for command in commands {
            if self.event_sink.wants_detailed_events() {
                self.emit(DeployEvent::CommandStarted {
                    step,
                    command: command.to_string(),
                });
            }
            self.runner.run(command)?;
        }
        self.emit(DeployEvent::StepFinished { step });
        Ok(())
    }

    fn emit(&self, event: DeployEvent) {
        self.event_sink.on_event(event);
    }
}
