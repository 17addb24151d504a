use clusterctl::error::{CtlError, Result};
use clusterctl::tree::{CommandTree, ExecIo};

fn main() {
    if let Err(e) = run() {
        match e {
            // clap already rendered usage errors with full context
            CtlError::Usage(msg) => eprintln!("{}", msg),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut tree = CommandTree::build();
    tree.check();
    tree.execute(args, ExecIo::default())
}
