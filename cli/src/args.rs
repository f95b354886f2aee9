use std::path::PathBuf;
use structopt::StructOpt;

/// init-datasets creates the standard datasets of a Domino reporting project
/// and mounts the datasets it needs from the matching SDTM project.
///
/// The project, host and API key are read from the DOMINO_* environment
/// variables Domino sets in runs and workspaces.
#[derive(Debug, StructOpt)]
#[structopt(
    global_settings = &[
        structopt::clap::AppSettings::ColoredHelp,
    ]
)]
pub struct Args {
    #[structopt(short = "v", long = "verbose")]
    /// Enable more verbose logging.
    pub verbose: bool,

    #[structopt(long = "requirements", parse(from_os_str))]
    /// JSON file listing the datasets to create and to mount, as
    /// `{"datasets": {"<name>": "<description>"}, "mounts": ["<name>"]}`.
    /// Defaults to the standard reporting project layout.
    pub requirements: Option<PathBuf>,
}
