//! The one-call bridge API.
//!
//! Embedders that only ever want "create a cluster from this config file"
//! call [`create_cluster`] instead of driving the CLI surface. The function
//! forces the argument vector to the `create cluster -f <file>` path, wires
//! a fresh logger for the call, and folds every outcome into a `String`: the
//! success literal or the failing stage's error text. It never panics and
//! never returns a structured error; the caller gets exactly one string.

use crate::log::new_mirror;
use crate::tree::{CommandTree, ExecIo};

pub const SUCCESS_MESSAGE: &str = "Cluster created successfully";

/// Creates a cluster from `config_file`, returning [`SUCCESS_MESSAGE`] or
/// the error text of whichever stage failed.
///
/// Each call builds its own tree and logger, so repeated or concurrent calls
/// never observe another call's configuration.
pub fn create_cluster(config_file: &str) -> String {
    let mut tree = CommandTree::build();
    tree.check();

    // The mirror exists so embedders can later opt into log duplication;
    // with duplicate=false stdout stays the only effective sink.
    let io = ExecIo {
        mirror: new_mirror(),
        ..ExecIo::default()
    };

    let args = ["create", "cluster", "-f", config_file];
    match tree.execute(args, io) {
        Ok(()) => SUCCESS_MESSAGE.to_string(),
        Err(err) => err.to_string(),
    }
}
