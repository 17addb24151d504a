use std::io::Write;

use clap::{ArgMatches, Command};

use super::{output_arg, output_value, HandlerCtx};
use crate::buildinfo;
use crate::error::{CtlError, Result};

pub fn command() -> Command {
    Command::new("info")
        .about("Output the version of clusterctl, the provisioner and OS info")
        .arg(output_arg())
}

pub fn run(ctx: &mut HandlerCtx, matches: &ArgMatches) -> Result<()> {
    match output_value(matches) {
        "" => {
            let info = buildinfo::get_info();
            writeln!(ctx.out, "clusterctl version: {}", info.clusterctl_version)?;
            writeln!(ctx.out, "provisioner version: {}", info.provisioner_version)?;
            writeln!(ctx.out, "OS: {}", info.os)?;
        }
        "json" => {
            writeln!(ctx.out, "{}", buildinfo::info_json()?)?;
        }
        other => return Err(CtlError::UnknownOutput(other.to_string())),
    }
    Ok(())
}
