use clap::{Arg, ArgMatches, Command};

use super::HandlerCtx;
use crate::cluster::ClusterConfig;
use crate::error::{CtlError, Result};

pub fn command() -> Command {
    Command::new("create")
        .about("Create resource(s)")
        .allow_external_subcommands(true)
        .subcommand(
            Command::new("cluster")
                .about("Create a cluster from a configuration file")
                .arg(
                    Arg::new("config-file")
                        .short('f')
                        .long("config-file")
                        .value_name("FILE")
                        .required(true)
                        .help("load cluster configuration from FILE"),
                ),
        )
}

/// Handler for `create cluster`. Loads and validates the config, then hands
/// it to the provisioning backend.
pub fn run_cluster(ctx: &mut HandlerCtx, matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("config-file")
        .ok_or_else(|| CtlError::Usage("--config-file is required".to_string()))?;
    let config = ClusterConfig::load(path)?;
    ctx.provisioner.create_cluster(&config, &mut ctx.logger)
}
