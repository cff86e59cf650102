//! Integration tests for deploy-wizard-validation
//!
//! These tests verify the complete workflow from reading an uploaded
//! configuration to the shell's progression decision.

use deploy_wizard_validation::run_wizard_validation;
use deploy_wizard_validation::wizard::{
    MASTER_POLICY_NOT_FOUND_MSG, STORAGE_POLICY_STEP, WORKLOAD_NETWORK_STEP,
};

const CATALOG: &str = "src/tests/test_data/catalog_01.json";

#[tokio::test]
async fn test_new_segment_upload_proceeds() {
    let shell = run_wizard_validation("src/tests/test_data/uploaded_config_01.json", CATALOG)
        .await
        .expect("Failed to run wizard validation");

    assert!(shell.step_valid(WORKLOAD_NETWORK_STEP));
    assert!(shell.step_valid(STORAGE_POLICY_STEP));
    assert!(shell.can_proceed(), "Valid upload should proceed");
}

#[tokio::test]
async fn test_existing_network_upload_proceeds() {
    let shell = run_wizard_validation("src/tests/test_data/uploaded_config_02.json", CATALOG)
        .await
        .expect("Failed to run wizard validation");

    assert!(
        shell.can_proceed(),
        "Known segment name should reuse the existing network"
    );
}

#[tokio::test]
async fn test_invalid_upload_is_blocked() {
    let shell = run_wizard_validation("src/tests/test_data/uploaded_config_03.json", CATALOG)
        .await
        .expect("Failed to run wizard validation");

    assert!(!shell.can_proceed(), "Out-of-subnet range should block");
    assert!(!shell.step_valid(WORKLOAD_NETWORK_STEP));
    assert!(!shell.step_valid(STORAGE_POLICY_STEP));

    let errors = shell.blocking_errors();
    assert_eq!(
        errors.len(),
        2,
        "Expected one error per invalid step: {errors:?}"
    );
    assert!(errors.contains(&"The End IP is out of the provided subnet."));
    assert!(errors.contains(&MASTER_POLICY_NOT_FOUND_MSG));
}

#[tokio::test]
async fn test_malformed_upload_fails_loading() {
    let result =
        run_wizard_validation("src/tests/test_data/uploaded_config_bad.json", CATALOG).await;
    let err = result.expect_err("Malformed upload should fail to parse");
    assert!(
        err.to_string().contains("workload_gateway_cidr"),
        "Parse error should name the offending path: {err}"
    );
}

#[tokio::test]
async fn test_missing_files_fail_loading() {
    assert!(run_wizard_validation("src/tests/test_data/nope.json", CATALOG)
        .await
        .is_err());
    assert!(run_wizard_validation(
        "src/tests/test_data/uploaded_config_01.json",
        "src/tests/test_data/nope.json"
    )
    .await
    .is_err());
}
