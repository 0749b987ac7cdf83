//! End-to-end runs of the binary against fake `npm`, `yarn` and `git`.

mod common;

use common::*;

#[test]
fn missing_token_fails_before_any_command() {
    let env = TestEnv::new();
    env.write_project_file("package-lock.json", &package_lock("1.0.0"));

    let result = env.run(&[], &github_env("refs/heads/develop"));

    assert!(!result.success);
    assert!(
        result.stderr.contains("no access token found"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(env.commands().is_empty());
    assert_eq!(env.github_output(), "");
}

#[test]
fn whitespace_token_from_workflow_input_fails() {
    let env = TestEnv::new();

    let mut vars = github_env("refs/heads/develop");
    vars.push(("INPUT_ACCESS-TOKEN", "   "));
    let result = env.run(&[], &vars);

    assert!(!result.success);
    assert!(result.stderr.contains("no access token found"));
}

#[test]
fn push_to_deploy_branch_does_nothing() {
    let env = TestEnv::new();
    env.write_project_file("package-lock.json", &package_lock("1.0.0"));

    let result = env.run(
        &["--access-token", "tok"],
        &github_env("refs/heads/main"),
    );

    assert!(result.success, "{}", result.combined_output());
    assert!(env.commands().is_empty());
    assert_eq!(env.github_output(), "");
}

#[test]
fn missing_ci_context_is_reported() {
    let env = TestEnv::new();

    let result = env.run(&["--access-token", "tok"], &[]);

    assert!(!result.success);
    assert!(result.stderr.contains("GITHUB_REF"));
}

#[test]
fn json_mode_reports_error_event() {
    let env = TestEnv::new();

    let result = env.run(&["--json"], &github_env("refs/heads/develop"));

    assert!(!result.success);
    let event: serde_json::Value = serde_json::from_str(result.stdout.lines().last().unwrap()).unwrap();
    assert_eq!(event["event"], "error");
}

#[cfg(unix)]
#[test]
fn npm_project_end_to_end() {
    let env = TestEnv::new();
    env.install_default_tools();
    env.write_project_file("package-lock.json", &package_lock("0.0.80"));

    let mut vars = github_env("refs/heads/develop");
    vars.push(("INPUT_ACCESS-TOKEN", "tok"));
    // unset optional inputs arrive as empty strings
    vars.push(("INPUT_BUILD-ARGS", ""));
    vars.push(("INPUT_SCULLY-ARGS", ""));
    let result = env.run(&[], &vars);

    assert!(result.success, "{}", result.combined_output());
    let commands = env.commands();
    assert_eq!(commands[0], "npm ci");
    assert_eq!(commands[1], "npm run build");
    assert_eq!(commands[2], "npm run scully -- --nw");
    assert_eq!(commands[3], "git init");
    assert_eq!(commands[4], "git config user.name monalisa");
    assert_eq!(
        commands[5],
        "git config user.email monalisa@users.noreply.github.com"
    );
    assert_eq!(commands[6], "git add .");
    assert!(commands[7].starts_with("git commit -m "));
    assert!(commands[7].ends_with(SHA));
    assert_eq!(
        commands[8],
        "git push --force https://tok@github.com/octo/site.git HEAD:main"
    );
    assert_eq!(env.github_output(), "success=true\n");
    assert!(!result.combined_output().contains("tok@"));
}

#[cfg(unix)]
#[test]
fn yarn_project_with_cname_and_config_file() {
    let env = TestEnv::new();
    env.install_default_tools();
    env.write_project_file(
        "yarn.lock",
        "# yarn lockfile v1\n\n\"@scullyio/scully@^1.0.0\":\n  version \"1.0.1\"\n",
    );
    env.write_project_file("CNAME", "www.example.com\n");
    env.write_project_file(
        "scully-deploy.toml",
        "[deploy]\nbranch = \"gh-pages\"\n\n[build]\nargs = \"--prod\"\n",
    );

    let result = env.run(
        &["--access-token", "tok", "--scully-args", "-- --scanRoutes"],
        &github_env("refs/heads/main"),
    );

    assert!(result.success, "{}", result.combined_output());
    let commands = env.commands();
    assert_eq!(commands[0], "yarn install --frozen-lockfile");
    assert_eq!(commands[1], "yarn run build -- --prod");
    assert_eq!(commands[2], "yarn run scully -- --scanRoutes");
    assert_eq!(
        commands.last().unwrap(),
        "git push --force https://tok@github.com/octo/site.git HEAD:gh-pages"
    );
    assert_eq!(
        std::fs::read(env.project_path("dist/static/CNAME")).unwrap(),
        b"www.example.com\n"
    );
}

#[cfg(unix)]
#[test]
fn failing_build_stops_the_run() {
    let env = TestEnv::new();
    env.install_tool("npm", "if [ \"$1\" = run ]; then exit 2; fi");
    env.install_tool("git", "");
    env.write_project_file("package-lock.json", &package_lock("1.0.0"));

    let result = env.run(
        &["--access-token", "tok"],
        &github_env("refs/heads/develop"),
    );

    assert!(!result.success);
    assert!(
        result.stderr.contains("`npm run build` failed with exit code 2"),
        "stderr:\n{}",
        result.stderr
    );
    assert_eq!(env.commands(), vec!["npm ci", "npm run build"]);
    assert_eq!(env.github_output(), "");
}

#[cfg(unix)]
#[test]
fn missing_generator_in_lockfile_is_reported() {
    let env = TestEnv::new();
    env.install_default_tools();
    env.write_project_file(
        "package-lock.json",
        r#"{ "lockfileVersion": 1, "dependencies": {} }"#,
    );

    let result = env.run(
        &["--access-token", "tok"],
        &github_env("refs/heads/develop"),
    );

    assert!(!result.success);
    assert!(result
        .stderr
        .contains("package '@scullyio/scully' not found in package-lock.json"));
}

#[cfg(unix)]
#[test]
fn json_mode_keeps_stdout_ndjson_without_output_file() {
    let env = TestEnv::new();
    env.install_default_tools();
    env.write_project_file("package-lock.json", &package_lock("1.0.0"));
    env.write_project_file("scully-deploy.toml", "[deploy]\nbranchh = \"pages\"\n");

    let mut vars = github_env("refs/heads/develop");
    vars.push(("INPUT_ACCESS-TOKEN", "tok"));
    vars.push(("GITHUB_OUTPUT", ""));
    vars.push(("GITHUB_ACTIONS", "true"));
    let result = env.run(&["--json"], &vars);

    assert!(result.success, "{}", result.combined_output());
    assert!(!result.stdout.trim().is_empty());
    for line in result.stdout.lines() {
        assert!(
            serde_json::from_str::<serde_json::Value>(line).is_ok(),
            "non-JSON stdout line: {}",
            line
        );
    }
    assert!(result.stderr.contains("::set-output name=success::true"));
    assert!(result.stderr.contains("::warning "));
    assert_eq!(env.github_output(), "");
}
