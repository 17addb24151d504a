use std::io::Write;

use clap::{Arg, ArgMatches};

use crate::cluster::Provision;
use crate::log::Logger;

pub mod create;
pub mod info;
pub mod version;

/// Everything a command handler is allowed to touch: its logger, its output
/// stream, and the provisioning backend. Built fresh for every execution, so
/// concurrent invocations never share state.
pub struct HandlerCtx {
    pub logger: Logger,
    pub out: Box<dyn Write + Send>,
    pub provisioner: Box<dyn Provision>,
}

/// The shared `-o/--output` flag carried by the informational commands.
pub(crate) fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FORMAT")
        .default_value("")
        .help("specifies the output format (valid option: json)")
}

pub(crate) fn output_value(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("")
}
