use super::*;

/// Tests startup with a stored token.
///
/// Verifies that the controller goes straight to the dashboard and fetches the
/// server list exactly once.
///
/// Expected: Ok(Screen::Dashboard) with the fetched servers, one request
#[tokio::test]
async fn starts_on_dashboard_with_token() -> Result<(), ViewError> {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(200, json!([factory::server_json("s1")]))
        .build();
    let controller = test.controller();

    let screen = controller.start().await?;

    assert!(screen.shows_header());
    let Screen::Dashboard(Dashboard { servers }) = &screen else {
        panic!("expected dashboard, got {:?}", screen);
    };
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name, "s1");
    assert_eq!(test.transport.count_url("/api/servers"), 1);
    assert_eq!(test.transport.request_count(), 1);

    Ok(())
}

/// Tests startup without a token.
///
/// Expected: Ok(Screen::Login) and no request sent
#[tokio::test]
async fn starts_on_login_without_token() -> Result<(), ViewError> {
    let test = TestBuilder::new().build();
    let controller = test.controller();

    let screen = controller.start().await?;

    assert_eq!(screen, Screen::Login);
    assert!(!screen.shows_header());
    assert_eq!(test.transport.request_count(), 0);

    Ok(())
}

/// Tests startup when the server list fails.
///
/// Expected: Err(ViewError::Api) wrapping the server error
#[tokio::test]
async fn start_surfaces_server_error() {
    let test = TestBuilder::new()
        .with_token("T1")
        .respond(500, factory::error_json("boom"))
        .build();

    let result = test.controller().start().await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        ViewError::Api {
            action: "Loading servers",
            source: ApiError::Server { .. }
        }
    ));
    assert!(err.to_string().contains("boom"));
}
