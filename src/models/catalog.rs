//! Infrastructure catalog data model.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// The names wizard steps validate selections against.
///
/// In the full product these lists are fetched from the target environment
/// before the wizard opens; here they arrive as plain data so the steps stay
/// pure.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Catalog {
    /// Workload networks that already exist and can be picked as-is.
    pub workload_networks: Vec<String>,
    /// Port groups a newly created network segment may attach to.
    pub port_groups: Vec<String>,
    /// Storage policies available for the control-plane VMs.
    pub storage_policies: Vec<String>,
}

impl Catalog {
    /// Read a catalog from a JSON file.
    ///
    /// # Returns
    /// * `Ok(Catalog)` - The parsed catalog
    /// * `Err` - If the file does not exist or the JSON is malformed
    pub fn from_file(path: &str) -> Result<Catalog, Box<dyn Error>> {
        if !Path::new(path).exists() {
            return Err(format!("Catalog file does not exist: {path}").into());
        }
        log::info!("Reading catalog file: {path}");

        let json = std::fs::read_to_string(path)?;
        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let catalog: Catalog =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
                format!(
                    "Error parsing catalog file {path}: path={} error={}",
                    e.path(),
                    e
                )
            })?;
        Ok(catalog)
    }

    pub fn has_workload_network(&self, name: &str) -> bool {
        self.workload_networks.iter().any(|n| n == name)
    }

    pub fn has_port_group(&self, name: &str) -> bool {
        self.port_groups.iter().any(|n| n == name)
    }

    pub fn has_storage_policy(&self, name: &str) -> bool {
        self.storage_policies.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog {
            workload_networks: vec!["wrk-network-1".to_string()],
            port_groups: vec!["vm-network".to_string()],
            storage_policies: vec!["Policy-1".to_string(), "Policy-2".to_string()],
        }
    }

    #[test]
    fn test_membership_checks() {
        let catalog = sample();
        assert!(catalog.has_workload_network("wrk-network-1"));
        assert!(!catalog.has_workload_network("wrk-network-2"));
        assert!(catalog.has_port_group("vm-network"));
        assert!(!catalog.has_port_group("dvs-network"));
        assert!(catalog.has_storage_policy("Policy-2"));
        assert!(!catalog.has_storage_policy("Policy-9"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "workload_networks": ["wrk-network-1"],
            "port_groups": ["vm-network"],
            "storage_policies": ["Policy-1"]
        }"#;
        let catalog: Catalog = serde_json::from_str(json).expect("Error parsing catalog JSON");
        assert_eq!(catalog.workload_networks.len(), 1);
        assert_eq!(catalog.storage_policies[0], "Policy-1");
    }

    #[test]
    fn test_from_file() {
        let catalog = Catalog::from_file("src/tests/test_data/catalog_01.json")
            .expect("Error reading catalog file");
        assert!(!catalog.workload_networks.is_empty(), "Catalog should not be empty");
        assert!(catalog.has_storage_policy("Policy-1"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Catalog::from_file("src/tests/test_data/no_such_catalog.json")
            .expect_err("Missing file should error");
        assert!(err.to_string().contains("does not exist"));
    }
}
