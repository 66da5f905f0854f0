use super::*;

/// Tests changing the password of the logged in user.
///
/// Expected: Ok(true) and the new password in the body
#[tokio::test]
async fn change_password_posts_new_password() -> Result<(), ApiError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(200, json!({ "message": "User updated" }))
        .build();

    let result = test.client.change_password("new-pw").await?;

    assert!(result);
    let request = test.transport.last_request().unwrap();
    assert_eq!(request.url, "/api/user/update_password");
    assert_eq!(request.body.as_deref(), Some(r#"{"password":"new-pw"}"#));

    Ok(())
}

/// Tests a rejected password change.
///
/// Expected: Ok(false), token kept
#[tokio::test]
async fn change_password_rejected() -> Result<(), ApiError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(400, factory::error_json("Bad Request"))
        .build();

    assert!(!test.client.change_password("x").await?);
    assert_eq!(test.token(), Some("T1".to_string()));

    Ok(())
}

/// Tests deleting the account.
///
/// Expected: Ok(true) and the token erased
#[tokio::test]
async fn delete_account_erases_token() -> Result<(), ApiError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(200, json!({ "message": "User deleted" }))
        .build();

    let result = test.client.delete_account().await?;

    assert!(result);
    assert_eq!(test.token(), None);
    assert_eq!(test.transport.last_request().unwrap().url, "/api/delete-user");

    Ok(())
}

/// Tests that a failed deletion keeps the session.
///
/// Expected: Err(ApiError::Server) on 500, token kept
#[tokio::test]
async fn delete_account_server_error_keeps_token() {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(500, factory::error_json("boom"))
        .build();

    let result = test.client.delete_account().await;

    assert!(matches!(result, Err(ApiError::Server { .. })));
    assert_eq!(test.token(), Some("T1".to_string()));
}

/// Tests fetching the logged in user.
///
/// Verifies that the access level string is decoded case-insensitively.
///
/// Expected: Ok(Some(User)) with AccessLevel::Operator
#[tokio::test]
async fn get_user_info_decodes_access_level() -> Result<(), ApiError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(200, factory::user_json("steve", "OPERATOR"))
        .build();

    let user = test.client.get_user_info().await?.unwrap();

    assert_eq!(user.username, "steve");
    assert_eq!(user.access_level, AccessLevel::Operator);
    assert_eq!(test.transport.last_request().unwrap().url, "/api/user");

    Ok(())
}

/// Tests that an unknown access level is a hard error.
///
/// Expected: Err(ApiError::AccessLevel)
#[tokio::test]
async fn get_user_info_rejects_unknown_access_level() {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(200, factory::user_json("steve", "superuser"))
        .build();

    let result = test.client.get_user_info().await;

    assert_eq!(
        result,
        Err(ApiError::AccessLevel(ParseAccessLevelError(
            "superuser".to_string()
        )))
    );
}

/// Tests the negative value of get_user_info.
///
/// Expected: Ok(None) on 401
#[tokio::test]
async fn get_user_info_other_status_is_none() -> Result<(), ApiError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(401, json!({}))
        .build();

    assert_eq!(test.client.get_user_info().await?, None);

    Ok(())
}

/// Tests every authenticated account method without a session.
///
/// Expected: negative values and no request sent
#[tokio::test]
async fn account_methods_without_token_send_nothing() -> Result<(), ApiError> {
    let test = TestBuilder::new().build();

    assert!(!test.client.change_password("pw").await?);
    assert!(!test.client.delete_account().await?);
    assert_eq!(test.client.get_user_info().await?, None);
    assert_eq!(test.transport.request_count(), 0);

    Ok(())
}
