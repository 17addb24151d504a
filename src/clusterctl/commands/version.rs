use std::io::Write;

use clap::{ArgMatches, Command};

use super::{output_arg, output_value, HandlerCtx};
use crate::buildinfo;
use crate::error::{CtlError, Result};

pub fn command() -> Command {
    Command::new("version")
        .about("Output the version of clusterctl")
        .arg(output_arg())
}

pub fn run(ctx: &mut HandlerCtx, matches: &ArgMatches) -> Result<()> {
    match output_value(matches) {
        "" => writeln!(ctx.out, "{}", buildinfo::get_version())?,
        "json" => writeln!(ctx.out, "{}", buildinfo::version_json()?)?,
        other => return Err(CtlError::UnknownOutput(other.to_string())),
    }
    Ok(())
}
