//! Cluster configuration files and the provisioning collaborator.
//!
//! `clusterctl create cluster -f <file>` loads a JSON config, validates it,
//! and hands it to a [`Provision`] implementation. The default
//! [`FileProvisioner`] walks the provisioning stages locally; swapping in a
//! real cloud backend means implementing the trait, nothing else changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CtlError, Result};
use crate::log::Logger;

/// Version of the provisioning engine, reported next to the tool version.
pub const PROVISIONER_VERSION: &str = "1.29.3";

const DEFAULT_REGION: &str = "us-west-2";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    pub metadata: ClusterMetadata,
    #[serde(default)]
    pub node_groups: Vec<NodeGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMetadata {
    pub name: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroup {
    pub name: String,
    pub instance_type: String,
    #[serde(default = "default_capacity")]
    pub desired_capacity: u32,
}

fn default_capacity() -> u32 {
    2
}

impl ClusterConfig {
    /// Load and validate a config from the given file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ClusterConfig> {
        let content = fs::read_to_string(path.as_ref()).map_err(CtlError::Io)?;
        let config: ClusterConfig =
            serde_json::from_str(&content).map_err(CtlError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.metadata.name.is_empty() {
            return Err(CtlError::InvalidConfig(
                "metadata.name must not be empty".to_string(),
            ));
        }
        if self.metadata.region.is_empty() {
            return Err(CtlError::InvalidConfig(
                "metadata.region must not be empty".to_string(),
            ));
        }
        if self.node_groups.is_empty() {
            return Err(CtlError::InvalidConfig(
                "at least one node group is required".to_string(),
            ));
        }
        for group in &self.node_groups {
            if group.name.is_empty() {
                return Err(CtlError::InvalidConfig(
                    "nodeGroups[].name must not be empty".to_string(),
                ));
            }
            if group.desired_capacity == 0 {
                return Err(CtlError::InvalidConfig(format!(
                    "node group \"{}\" must have a positive desiredCapacity",
                    group.name
                )));
            }
        }
        Ok(())
    }
}

/// Seam for the cluster-creation backend.
pub trait Provision {
    fn create_cluster(&self, config: &ClusterConfig, logger: &mut Logger) -> Result<()>;
}

/// Default backend: narrates the provisioning stages for a validated config.
/// Performs no network I/O.
#[derive(Debug, Default)]
pub struct FileProvisioner;

impl Provision for FileProvisioner {
    fn create_cluster(&self, config: &ClusterConfig, logger: &mut Logger) -> Result<()> {
        logger.info(format!(
            "creating cluster \"{}\" in region \"{}\"",
            config.metadata.name, config.metadata.region
        ));
        logger.debug(format!(
            "resolved {} node group(s) from config",
            config.node_groups.len()
        ));
        for group in &config.node_groups {
            logger.info(format!(
                "provisioning node group \"{}\" ({} x {})",
                group.name, group.desired_capacity, group.instance_type
            ));
        }
        logger.success(format!(
            "cluster \"{}\" is ready",
            config.metadata.name
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{ColorMode, Logger};
    use std::io::Write;

    fn valid_config() -> ClusterConfig {
        ClusterConfig {
            metadata: ClusterMetadata {
                name: "demo".to_string(),
                region: DEFAULT_REGION.to_string(),
            },
            node_groups: vec![NodeGroup {
                name: "workers".to_string(),
                instance_type: "m5.large".to_string(),
                desired_capacity: 2,
            }],
        }
    }

    #[test]
    fn loads_a_valid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            serde_json::to_string(&valid_config()).unwrap().as_bytes(),
        )
        .unwrap();

        let loaded = ClusterConfig::load(&path).unwrap();
        assert_eq!(loaded, valid_config());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ClusterConfig::load("/no/such/cluster.json").unwrap_err();
        assert!(matches!(err, CtlError::Io(_)));
    }

    #[test]
    fn region_defaults_when_absent() {
        let raw = r#"{"metadata":{"name":"demo"},"nodeGroups":[{"name":"ng","instanceType":"m5.large"}]}"#;
        let config: ClusterConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.metadata.region, DEFAULT_REGION);
        assert_eq!(config.node_groups[0].desired_capacity, 2);
    }

    #[test]
    fn rejects_empty_name() {
        let mut config = valid_config();
        config.metadata.name.clear();
        assert!(matches!(
            config.validate(),
            Err(CtlError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_missing_node_groups() {
        let mut config = valid_config();
        config.node_groups.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_capacity() {
        let mut config = valid_config();
        config.node_groups[0].desired_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn provisioner_succeeds_on_valid_config() {
        let mut logger = Logger::with_sink(4, ColorMode::Plain, Box::new(std::io::sink()));
        let result = FileProvisioner.create_cluster(&valid_config(), &mut logger);
        assert!(result.is_ok());
    }
}
