//! # clusterctl Architecture
//!
//! clusterctl is a **library-first cluster provisioning tool**. The binary is
//! a thin client; everything it does is reachable through the library, up to
//! and including the one-call [`bridge`] API used by embedders.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Entry points (main.rs, bridge.rs)                          │
//! │  - main: parses env args, maps errors to exit codes         │
//! │  - bridge: forces the `create cluster -f <file>` path and   │
//! │    folds the outcome into a single String                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch layer (tree.rs)                                   │
//! │  - Builds the clap command tree + explicit dispatch table   │
//! │  - Validation pass installs the fallback for handler-less   │
//! │    commands, so nothing is silently unroutable              │
//! │  - Constructs the per-invocation Logger right before the    │
//! │    matched handler runs                                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Handlers (commands/*.rs)                                   │
//! │  - info / version: output formatting over buildinfo         │
//! │  - create: config loading + delegation to the Provision     │
//! │    trait (cluster.rs)                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logging (log/)                                             │
//! │  - Category bitmask derived from the verbosity level        │
//! │  - Plain / ANSI / rainbow sinks, optional mirror tee        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Shared Mutable State
//!
//! Every execution owns its `Logger`, output writer, and provisioner through
//! a `HandlerCtx`. Nothing is process-global, so repeated or concurrent
//! invocations are isolated by construction.
//!
//! ## Module Overview
//!
//! - [`bridge`]: the embeddable `create_cluster(file) -> String` entry point
//! - [`tree`]: command tree builder, validator, and executor
//! - [`commands`]: one module per handler plus the shared `HandlerCtx`
//! - [`cluster`]: cluster config format and the provisioning seam
//! - [`log`]: the level/category/color logging pipeline
//! - [`buildinfo`]: version and host info for `info`/`version`
//! - [`error`]: error types

pub mod bridge;
pub mod buildinfo;
pub mod cluster;
pub mod commands;
pub mod error;
pub mod log;
pub mod tree;
