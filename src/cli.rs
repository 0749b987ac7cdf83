use std::path::PathBuf;

use clap::Parser;

/// scully-deploy - build a Scully site and push it to a deploy branch
#[derive(Parser, Debug)]
#[command(name = "scully-deploy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Inputs also read the GitHub Actions variables INPUT_ACCESS-TOKEN, INPUT_DEPLOY-BRANCH, INPUT_BUILD-ARGS and INPUT_SCULLY-ARGS."
)]
pub struct Cli {
    /// Personal access token used to push the generated site
    #[arg(long, env = "INPUT_ACCESS-TOKEN", hide_env_values = true, default_value = "")]
    pub access_token: String,

    /// Branch that receives the generated site [default: main]
    #[arg(long, env = "INPUT_DEPLOY-BRANCH")]
    pub deploy_branch: Option<String>,

    /// Extra arguments for the build script
    #[arg(long, env = "INPUT_BUILD-ARGS", allow_hyphen_values = true)]
    pub build_args: Option<String>,

    /// Extra arguments for the Scully script
    #[arg(long, env = "INPUT_SCULLY-ARGS", allow_hyphen_values = true)]
    pub scully_args: Option<String>,

    /// Project checkout to deploy
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Generated site directory, relative to the project root [default: dist/static]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Config file (defaults to scully-deploy.toml in the project root)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
