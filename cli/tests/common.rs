use std::{
    ffi::OsStr,
    path::PathBuf,
    process::{Command, Output},
};

pub const API_KEY: &str = "integration-test-key";
pub const PROJECT_ID: &str = "p-reporting";
pub const PROJECT_OWNER: &str = "alice";

const ENV_VARIABLES: [&str; 5] = [
    "DOMINO_USER_API_KEY",
    "DOMINO_API_HOST",
    "DOMINO_PROJECT_ID",
    "DOMINO_PROJECT_OWNER",
    "DOMINO_PROJECT_NAME",
];

/// Runs the built binary against a mock Domino API.
pub struct TestCli {
    cli_path: PathBuf,
    api_host: String,
    project_name: String,
}

impl TestCli {
    pub fn new(api_host: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            cli_path: PathBuf::from(env!("CARGO_BIN_EXE_init-datasets")),
            api_host: api_host.into(),
            project_name: project_name.into(),
        }
    }

    /// A command with the full Domino environment and nothing inherited that
    /// could change what it does.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.cli_path);
        for name in ENV_VARIABLES {
            command.env_remove(name);
        }

        command
            .env_remove("RUST_LOG")
            .env("DOMINO_USER_API_KEY", API_KEY)
            .env("DOMINO_API_HOST", &self.api_host)
            .env("DOMINO_PROJECT_ID", PROJECT_ID)
            .env("DOMINO_PROJECT_OWNER", PROJECT_OWNER)
            .env("DOMINO_PROJECT_NAME", &self.project_name);

        command
    }

    /// Runs the binary, expecting success, and returns what it logged.
    pub fn run(&self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> String {
        self.output(self.command().args(args))
    }

    /// Runs the binary, expecting failure, and returns what it logged.
    pub fn run_and_error(&self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> String {
        self.output_error(self.command().args(args))
    }

    pub fn output(&self, command: &mut Command) -> String {
        let output = command.output().unwrap();

        if !output.status.success() {
            panic!(
                "failed to run command:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        logs(output)
    }

    pub fn output_error(&self, command: &mut Command) -> String {
        let output = command.output().unwrap();

        if output.status.success() {
            panic!(
                "succeeded running command (expected failure):\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        logs(output)
    }
}

// Everything is logged to stderr; nothing is printed on stdout.
fn logs(output: Output) -> String {
    assert!(
        output.stdout.is_empty(),
        "unexpected stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8(output.stderr).unwrap()
}
