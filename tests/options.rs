use bucket_versions_rs::{VersionsOptions, VersionsOptionsError};

#[test]
fn builder_sets_every_field() {
    let options = VersionsOptions::builder()
        .version_group("rel")
        .cache_capacity(8)
        .regex_size_limit(1 << 20)
        .build()
        .expect("options should build");

    assert_eq!(options.version_group, "rel");
    assert_eq!(options.cache_capacity, 8);
    assert_eq!(options.regex_size_limit, Some(1 << 20));
}

#[test]
fn builder_rejects_empty_group_name() {
    let err = VersionsOptions::builder()
        .version_group("")
        .build()
        .expect_err("empty group should fail");
    assert_eq!(err, VersionsOptionsError::EmptyVersionGroup);
}

#[test]
fn builder_rejects_invalid_group_name() {
    let err = VersionsOptions::builder()
        .version_group("my version")
        .build()
        .expect_err("space is not allowed");
    assert_eq!(
        err,
        VersionsOptionsError::InvalidVersionGroup {
            name: "my version".to_string(),
            invalid: ' ',
        }
    );
}

#[test]
fn deserializes_with_defaults_for_missing_fields() {
    let options: VersionsOptions =
        serde_json::from_str(r#"{"cache_capacity": 4}"#).expect("options should deserialize");

    assert_eq!(options.version_group, "version");
    assert_eq!(options.cache_capacity, 4);
    assert_eq!(options.regex_size_limit, None);
    assert!(options.validate().is_ok());
}
