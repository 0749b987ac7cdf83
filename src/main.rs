//! scully-deploy CLI
//!
//! Usage: scully-deploy --access-token <TOKEN> [--deploy-branch <BRANCH>]
//!
//! Intended to run as a GitHub Actions step; every option can also be
//! supplied through the matching `INPUT_*` variable.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scully_deploy::domain::ports::DeployEventSink;
use scully_deploy::domain::value_objects::AccessToken;
use scully_deploy::infrastructure::{
    ActionsOutput, ConsoleEventSink, GitHubActionsEnv, JsonEventSink, LocalFs,
    SystemCommandRunner,
};
use scully_deploy::{DeployReport, DeployUseCase, InputOverrides};

mod cli;
mod ui;

use cli::Cli;
use ui::ci::{
    emit_workflow_command, github_actions_annotation, running_in_github_actions, AnnotationLevel,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            if report.is_deployed() {
                let output = ActionsOutput::from_env().with_legacy_on_stderr(cli.json);
                if let Err(e) = output.set_output("success", "true") {
                    tracing::warn!("could not record the success output: {}", e);
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` keeps stdout clean
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: &Cli) -> Result<DeployReport> {
    let (config, warnings) =
        scully_deploy::config::load(&cli.project_root, cli.config.as_deref())?;
    for warning in &warnings {
        let message = format!("unknown config key '{}' ignored", warning.key);
        tracing::warn!(file = %warning.file.display(), "{}", message);
        if running_in_github_actions() {
            let file = warning.file.to_string_lossy();
            let annotation = github_actions_annotation(
                AnnotationLevel::Warning,
                &message,
                Some(file.as_ref()),
                Some("scully-deploy"),
            );
            emit_workflow_command(&annotation, cli.json);
        }
    }

    let inputs = InputOverrides {
        access_token: AccessToken::new(&cli.access_token),
        deploy_branch: cli.deploy_branch.clone(),
        build_args: cli.build_args.clone(),
        scully_args: cli.scully_args.clone(),
        output_dir: cli.output_dir.clone(),
    };
    let options = config.into_options(inputs, cli.project_root.clone());

    let event_sink: Arc<dyn DeployEventSink> = if cli.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink)
    };
    let runner = SystemCommandRunner::new().with_stdout_to_stderr(cli.json);

    let use_case =
        DeployUseCase::new(runner, LocalFs::new(), GitHubActionsEnv).with_event_sink(event_sink);
    Ok(use_case.execute(&options)?)
}
