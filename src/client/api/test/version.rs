use super::*;

/// Tests listing Minecraft versions.
///
/// Expected: Ok(vec) taken from the `versions` field
#[tokio::test]
async fn get_mc_versions_reads_versions_field() -> Result<(), ApiError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(200, json!({ "versions": ["1.21", "1.20.1"] }))
        .build();

    let versions = test.client.get_mc_versions().await?;

    assert_eq!(versions, vec!["1.21".to_string(), "1.20.1".to_string()]);
    assert_eq!(test.transport.last_request().unwrap().url, "/api/mc_versions");

    Ok(())
}

/// Tests listing Forge versions for one Minecraft version.
///
/// Expected: Ok(vec) from `/api/forge_versions/{mc_version}`
#[tokio::test]
async fn get_forge_versions_uses_version_path() -> Result<(), ApiError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(200, json!({ "versions": ["47.2.0"] }))
        .build();

    let versions = test.client.get_forge_versions("1.20.1").await?;

    assert_eq!(versions, vec!["47.2.0".to_string()]);
    assert_eq!(
        test.transport.last_request().unwrap().url,
        "/api/forge_versions/1.20.1"
    );

    Ok(())
}

/// Tests the error and negative paths of the version lists.
///
/// Expected: Err on 500, Ok(empty) on 400 and without a token
#[tokio::test]
async fn version_lists_error_and_negative_values() -> Result<(), ApiError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(500, factory::error_json("boom"))
        .respond(400, factory::error_json("Invalid mc_version"))
        .build();

    assert!(matches!(
        test.client.get_mc_versions().await,
        Err(ApiError::Server { .. })
    ));
    assert!(test.client.get_forge_versions("banana").await?.is_empty());

    let test = TestBuilder::new().build();
    assert!(test.client.get_mc_versions().await?.is_empty());
    assert!(test.client.get_forge_versions("1.20.1").await?.is_empty());
    assert_eq!(test.transport.request_count(), 0);

    Ok(())
}
