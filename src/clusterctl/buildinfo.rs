//! Version and host information reported by the `info` and `version`
//! commands. Git metadata is baked in by `build.rs`.

use serde::Serialize;

use crate::cluster::PROVISIONER_VERSION;
use crate::error::Result;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_HASH: &str = env!("GIT_HASH");
const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

/// What `version -o json` prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub git_commit: String,
    pub build_date: String,
}

/// What `info -o json` prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub clusterctl_version: String,
    pub provisioner_version: String,
    pub os: String,
}

/// The human-readable version string, e.g. `0.3.2` or `0.3.2-ab12cd3`.
pub fn get_version() -> String {
    if GIT_HASH.is_empty() {
        VERSION.to_string()
    } else {
        format!("{}-{}", VERSION, GIT_HASH)
    }
}

pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: get_version(),
        git_commit: GIT_HASH.to_string(),
        build_date: GIT_COMMIT_DATE.to_string(),
    }
}

pub fn version_json() -> Result<String> {
    Ok(serde_json::to_string(&version_info())?)
}

pub fn get_info() -> ToolInfo {
    ToolInfo {
        clusterctl_version: get_version(),
        provisioner_version: PROVISIONER_VERSION.to_string(),
        os: std::env::consts::OS.to_string(),
    }
}

pub fn info_json() -> Result<String> {
    Ok(serde_json::to_string(&get_info())?)
}
