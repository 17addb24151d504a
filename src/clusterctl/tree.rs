//! Command tree assembly, validation, and dispatch.
//!
//! The tree couples a `clap::Command` hierarchy with an explicit dispatch
//! table keyed by command path ("info", "create cluster", ...). Handlers are
//! plain function pointers; after [`CommandTree::check`] every direct child
//! of the root is guaranteed to route somewhere: children without a handler
//! get the fallback, which reports a resource error and prints the node's
//! help text.

use std::collections::HashMap;
use std::io::Write;

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgMatches, Command};

use crate::cluster::{FileProvisioner, Provision};
use crate::commands::{self, HandlerCtx};
use crate::error::{CtlError, Result};
use crate::log::{new_mirror, ColorMode, LogMirror, Logger};

const DEFAULT_VERBOSITY: i32 = 3;
const DEFAULT_COLOR: &str = "true";

pub type RunFn = fn(&mut HandlerCtx, &ArgMatches) -> Result<()>;

/// One dispatch-table entry. `Fallback` entries are installed by the
/// validation pass, never by the builder.
pub enum Handler {
    Run(RunFn),
    Fallback,
}

pub type DispatchTable = HashMap<String, Handler>;

/// Where an execution reads its collaborators from. Defaults wire stdout,
/// an unused mirror, and the file-backed provisioner.
pub struct ExecIo {
    pub mirror: LogMirror,
    pub duplicate: bool,
    pub out: Box<dyn Write + Send>,
    pub provisioner: Box<dyn Provision>,
}

impl Default for ExecIo {
    fn default() -> Self {
        ExecIo {
            mirror: new_mirror(),
            duplicate: false,
            out: Box::new(std::io::stdout()),
            provisioner: Box::new(FileProvisioner),
        }
    }
}

pub struct CommandTree {
    root: Command,
    table: DispatchTable,
}

impl CommandTree {
    /// Assembles the root command, its children, and the dispatch table.
    pub fn build() -> CommandTree {
        let root = Command::new("clusterctl")
            .about("The official CLI for cluster provisioning")
            .disable_help_subcommand(true)
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .value_name("LEVEL")
                    .value_parser(value_parser!(i32))
                    .default_value("3")
                    .global(true)
                    .help("set log level, use 0 to silence, 4 for debugging"),
            )
            .arg(
                Arg::new("color")
                    .short('C')
                    .long("color")
                    .value_name("MODE")
                    .default_value(DEFAULT_COLOR)
                    .global(true)
                    .help("toggle colorized logs (valid options: true, false, fabulous)"),
            )
            .subcommand(commands::create::command())
            .subcommand(
                // Recognized as a valid verb so the name shows up in help,
                // but carries no subcommands of its own.
                Command::new("anywhere")
                    .about("Cluster anywhere")
                    .allow_external_subcommands(true),
            )
            .subcommand(commands::info::command())
            .subcommand(commands::version::command());

        let mut table = DispatchTable::new();
        table.insert(
            "create cluster".to_string(),
            Handler::Run(commands::create::run_cluster),
        );
        table.insert("info".to_string(), Handler::Run(commands::info::run));
        table.insert("version".to_string(), Handler::Run(commands::version::run));

        CommandTree { root, table }
    }

    /// Validation pass: every direct child of the root without a dispatch
    /// entry gets the fallback handler, so no command is silently unroutable.
    pub fn check(&mut self) {
        for child in self.root.get_subcommands() {
            self.table
                .entry(child.get_name().to_string())
                .or_insert(Handler::Fallback);
        }
    }

    /// Parses `args` (without the program name) and runs the matched
    /// handler. The logger is constructed here, right before dispatch, from
    /// the parsed global flags and the caller's `ExecIo`.
    pub fn execute<I, S>(&mut self, args: I, io: ExecIo) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = std::iter::once(self.root.get_name().to_string())
            .chain(args.into_iter().map(Into::into))
            .collect();

        let matches = match self.root.clone().try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp
                        | ErrorKind::DisplayVersion
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                err.print().map_err(CtlError::Io)?;
                return Ok(());
            }
            Err(err) => return Err(CtlError::Usage(err.to_string())),
        };

        let level = matches
            .get_one::<i32>("verbose")
            .copied()
            .unwrap_or(DEFAULT_VERBOSITY);
        let mode = ColorMode::from_flag(
            matches
                .get_one::<String>("color")
                .map(String::as_str)
                .unwrap_or(DEFAULT_COLOR),
        );
        let mut ctx = HandlerCtx {
            logger: Logger::configure(level, mode, &io.mirror, io.duplicate),
            out: io.out,
            provisioner: io.provisioner,
        };

        let Some((name, sub)) = matches.subcommand() else {
            // Bare invocation: show help and exit cleanly.
            if let Err(err) = self.root.print_help() {
                let _ = writeln!(ctx.out, "ignoring help error \"{}\"", err);
            }
            return Ok(());
        };

        if let Some((child, grand)) = sub.subcommand() {
            let key = format!("{} {}", name, child);
            if let Some(Handler::Run(run)) = self.table.get(key.as_str()) {
                let run = *run;
                return run(&mut ctx, grand);
            }
        }

        let run = match self.table.get(name) {
            Some(Handler::Run(run)) => Some(*run),
            _ => None,
        };
        match run {
            Some(run) => run(&mut ctx, sub),
            None => self.run_fallback(name, sub, &mut ctx),
        }
    }

    /// Deterministic error path for handler-less commands: report the missing
    /// or unknown resource, print the node's help, return the error so the
    /// process exits non-zero. A failing help renderer is only worth a debug
    /// line.
    fn run_fallback(
        &mut self,
        name: &str,
        matches: &ArgMatches,
        ctx: &mut HandlerCtx,
    ) -> Result<()> {
        let err = match matches.subcommand() {
            Some((resource, _)) => CtlError::UnknownResource(resource.to_string()),
            None => CtlError::MissingResource(name.to_string()),
        };
        let _ = writeln!(ctx.out, "Error: {}\n", err);

        if let Some(node) = self.root.find_subcommand_mut(name) {
            if let Err(help_err) = node.print_help() {
                ctx.logger
                    .debug(format!("ignoring help error \"{}\"", help_err));
            }
        }
        Err(err)
    }

    #[cfg(test)]
    fn has_entry(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }
}
