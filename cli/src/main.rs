#![deny(clippy::all)]

mod args;
mod commands;
mod config;
mod utils;

use anyhow::{Context, Result};
use domino_client::{Client, Config};
use log::{error, info};
use std::process;
use structopt::StructOpt;

use crate::{
    args::Args,
    config::{ProjectEnv, Requirements},
    utils::io::init_env_logger,
};

fn run(args: Args) -> Result<()> {
    let project = ProjectEnv::from_env()?;
    let requirements = match &args.requirements {
        Some(path) => config::read_requirements(path)?,
        None => Requirements::default(),
    };

    info!(
        "Setting up datasets for project `{}` [id: {}]",
        project.project_path(),
        project.project_id
    );

    let client = Client::new(Config {
        endpoint: project.api_host.clone(),
        token: project.api_key.clone(),
    })
    .context("Failed to initialise the API client.")?;

    commands::run(&client, &project, &requirements)
}

fn main() {
    let args = Args::from_args();
    init_env_logger(args.verbose);

    if let Err(error) = run(args) {
        error!("An error occurred:");
        for cause in error.chain() {
            error!(" |- {cause}");
        }

        #[cfg(feature = "backtrace")]
        {
            error!("{}", error.backtrace());
        }

        process::exit(1);
    }
}
