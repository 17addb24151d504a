use clusterctl::bridge::{create_cluster, SUCCESS_MESSAGE};

#[test]
fn bridge_returns_success_literal_for_a_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cluster.json");
    std::fs::write(
        &path,
        r#"{"metadata":{"name":"e2e","region":"ap-southeast-2"},
            "nodeGroups":[{"name":"ng","instanceType":"m5.xlarge","desiredCapacity":4}]}"#,
    )
    .unwrap();

    assert_eq!(create_cluster(path.to_str().unwrap()), SUCCESS_MESSAGE);
}

#[test]
fn bridge_returns_error_text_for_a_missing_config() {
    let result = create_cluster("/tmp/definitely-not-a-config-file.json");
    assert!(!result.is_empty());
    assert_ne!(result, SUCCESS_MESSAGE);
}

#[test]
fn bridge_returns_validation_errors_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cluster.json");
    std::fs::write(&path, r#"{"metadata":{"name":"","region":"us-east-1"},"nodeGroups":[{"name":"ng","instanceType":"m5.large"}]}"#).unwrap();

    let result = create_cluster(path.to_str().unwrap());
    assert!(result.contains("metadata.name"));
}

#[test]
fn bridge_never_panics_on_strange_input() {
    for input in ["", " ", "\n", "::::", "/"] {
        let result = create_cluster(input);
        assert_ne!(result, SUCCESS_MESSAGE);
    }
}
