use scully_deploy::{ConfigError, DeployError};

use crate::ui::ci::{
    emit_workflow_command, github_actions_annotation, running_in_github_actions, AnnotationLevel,
};

/// Suggested fix for errors users can resolve themselves
fn fix_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return match deploy {
            DeployError::MissingAccessToken => Some(
                "Add `access-token: ${{ secrets.ACCESS_TOKEN }}` to the step's `with:` block.",
            ),
            DeployError::MissingContext { .. } => Some(
                "Run inside GitHub Actions, or export GITHUB_REF, GITHUB_SHA, GITHUB_ACTOR and GITHUB_REPOSITORY.",
            ),
            DeployError::InvalidArguments { .. } => {
                Some("Quote arguments containing spaces with matching \" or ' characters.")
            }
            DeployError::Lockfile(_) => Some(
                "Commit yarn.lock or package-lock.json and make sure @scullyio/scully is a dependency.",
            ),
            _ => None,
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return Some("Fix scully-deploy.toml or pass --config with a valid file.");
    }
    None
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = fix_hint(err) {
        out.push_str(&format!("  fix: {}\n", hint));
    }
    out
}

/// Report the failure reason of the run
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        println!("{}", output);
    }

    if running_in_github_actions() {
        let file = err
            .downcast_ref::<ConfigError>()
            .map(|_| scully_deploy::config::CONFIG_FILE);
        let annotation = github_actions_annotation(
            AnnotationLevel::Error,
            &err.to_string(),
            file,
            Some("scully-deploy"),
        );
        emit_workflow_command(&annotation, json);
    }

    eprint!("{}", format_error(err));
}
