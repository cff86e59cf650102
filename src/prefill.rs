//! One-shot prefill from a previously-uploaded configuration file.
//!
//! When the user re-opens the wizard after uploading a configuration, the
//! saved values are loaded once at step initialization and mapped into the
//! step inputs. There is no ongoing subscription; the file is read, parsed
//! and discarded.

use crate::models::Catalog;
use crate::wizard::{NetworkSelection, StoragePolicySelection};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Values recovered from an uploaded configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PrefillConfig {
    /// Name of the workload network segment from the upload.
    #[serde(default)]
    pub workload_segment_name: String,
    /// Port group the segment attaches to.
    #[serde(default)]
    pub workload_port_group: String,
    /// Gateway in CIDR notation.
    #[serde(default)]
    pub workload_gateway_cidr: String,
    /// First address of the workload range.
    #[serde(default)]
    pub workload_start_address: String,
    /// Last address of the workload range.
    #[serde(default)]
    pub workload_end_address: String,
    /// Storage policy for control-plane (master) VMs.
    #[serde(default)]
    pub master_storage_policy: String,
    /// Storage policy for ephemeral disks.
    #[serde(default)]
    pub ephemeral_storage_policy: String,
    /// Storage policy for the image cache.
    #[serde(default)]
    pub image_storage_policy: String,
}

/// Read a prefill configuration from a JSON file.
///
/// # Arguments
/// * `path` - Path to the uploaded configuration file
///
/// # Returns
/// * `Ok(PrefillConfig)` - The parsed configuration values
/// * `Err` - If the file does not exist or the JSON is malformed; parse
///   errors name the offending path inside the document
pub async fn load_prefill(path: &str) -> Result<PrefillConfig, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Prefill file does not exist: {path}").into());
    }
    log::info!("Reading prefill file: {path}");

    let json = tokio::fs::read_to_string(path).await?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let config: PrefillConfig =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            format!(
                "Error parsing prefill file {path}: path={} error={}",
                e.path(),
                e
            )
        })?;

    Ok(config)
}

/// Map the uploaded values into a network selection.
///
/// If the uploaded segment name matches a known workload network the step
/// prefills to reuse it; otherwise the step prefills the "create new"
/// variant with the uploaded segment, gateway and range values.
pub fn network_selection_from_prefill(
    config: &PrefillConfig,
    catalog: &Catalog,
) -> NetworkSelection {
    if catalog.has_workload_network(&config.workload_segment_name) {
        log::debug!(
            "Uploaded segment '{}' matches an existing workload network",
            config.workload_segment_name
        );
        NetworkSelection::Existing {
            network_name: config.workload_segment_name.clone(),
        }
    } else {
        log::debug!(
            "Uploaded segment '{}' is unknown, prefilling new-segment fields",
            config.workload_segment_name
        );
        NetworkSelection::New {
            segment_name: config.workload_segment_name.clone(),
            port_group: config.workload_port_group.clone(),
            gateway_cidr: config.workload_gateway_cidr.clone(),
            start_address: config.workload_start_address.clone(),
            end_address: config.workload_end_address.clone(),
        }
    }
}

/// Map the uploaded values into the storage policy selection.
pub fn storage_selection_from_prefill(config: &PrefillConfig) -> StoragePolicySelection {
    StoragePolicySelection {
        master: config.master_storage_policy.clone(),
        ephemeral: config.ephemeral_storage_policy.clone(),
        image: config.image_storage_policy.clone(),
    }
}
