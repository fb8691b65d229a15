//! Device operations: listing, filtering, create, delete.

mod common;

use anyhow::Result;
use httpmock::Method::{DELETE, GET, POST};
use httpmock::MockServer;
use serde_json::json;
use starfish_sdk::Error;

#[tokio::test]
async fn get_devices_returns_the_device_array() -> Result<()> {
    let server = MockServer::start_async().await;
    let token = common::jwt_expiring_in(3600);

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/solutions/sandbox/devices")
                .header("authorization", token.as_str());
            then.status(200).json_body(json!({
                "devices": [
                    {"id": "d1", "deviceType": "meter"},
                    {"id": "d2", "deviceType": "sensor"}
                ]
            }));
        })
        .await;

    let service = common::token_service(&server, &token);
    let devices = service.get_devices().await?;

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["id"], json!("d1"));
    assert_eq!(devices[1]["deviceType"], json!("sensor"));
    Ok(())
}

#[tokio::test]
async fn empty_device_listing_is_an_error() -> Result<()> {
    let server = MockServer::start_async().await;
    let token = common::jwt_expiring_in(3600);

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/solutions/sandbox/devices");
            then.status(200).json_body(json!({"devices": []}));
        })
        .await;

    let service = common::token_service(&server, &token);
    let err = service.get_devices().await.unwrap_err();
    assert!(err.is_empty_result());
    assert_eq!(err.to_string(), "No devices found");
    Ok(())
}

#[tokio::test]
async fn device_listing_without_devices_key_is_an_error() -> Result<()> {
    let server = MockServer::start_async().await;
    let token = common::jwt_expiring_in(3600);

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/solutions/sandbox/devices");
            then.status(404).json_body(json!({"message": "solution not found"}));
        })
        .await;

    let service = common::token_service(&server, &token);
    let err = service.get_devices().await.unwrap_err();
    assert_eq!(err.to_string(), "No devices found");
    Ok(())
}

#[tokio::test]
async fn query_devices_appends_the_encoded_filter() -> Result<()> {
    let server = MockServer::start_async().await;
    let token = common::jwt_expiring_in(3600);

    let filtered_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/solutions/sandbox/devices")
                .query_param("a", "b");
            then.status(200).json_body(json!({"devices": [{"id": "d1"}]}));
        })
        .await;

    let service = common::token_service(&server, &token);
    service.query_devices(&[("a", "b")]).await?;

    filtered_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn query_devices_without_filter_sends_no_query_string() -> Result<()> {
    let server = MockServer::start_async().await;
    let token = common::jwt_expiring_in(3600);

    let filtered_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/solutions/sandbox/devices")
                .query_param("a", "b");
            then.status(200).json_body(json!({"devices": [{"id": "filtered"}]}));
        })
        .await;
    let bare_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/solutions/sandbox/devices");
            then.status(200).json_body(json!({"devices": [{"id": "d1"}]}));
        })
        .await;

    let service = common::token_service(&server, &token);
    let devices = service.query_devices(&[]).await?;

    assert_eq!(devices[0]["id"], json!("d1"));
    assert_eq!(filtered_mock.hits_async().await, 0);
    assert_eq!(bare_mock.hits_async().await, 1);
    Ok(())
}

#[tokio::test]
async fn post_device_passes_the_response_through() -> Result<()> {
    let server = MockServer::start_async().await;
    let token = common::jwt_expiring_in(3600);
    let device = json!({"deviceType": "meter", "domainInfo": {"modelName": "m-100"}});

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/solutions/sandbox/devices")
                .header("content-type", "application/json")
                .json_body(device.clone());
            then.status(201).json_body(json!({"id": "d-new", "deviceType": "meter"}));
        })
        .await;

    let service = common::token_service(&server, &token);
    let created = service.post_device(&device).await?;
    assert_eq!(created["id"], json!("d-new"));
    Ok(())
}

#[tokio::test]
async fn delete_device_targets_the_device_path() -> Result<()> {
    let server = MockServer::start_async().await;
    let token = common::jwt_expiring_in(3600);

    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/solutions/sandbox/devices/d1");
            then.status(200).json_body(json!({"id": "d1"}));
        })
        .await;

    let service = common::token_service(&server, &token);
    let deleted = service.delete_device("d1").await?;
    assert_eq!(deleted["id"], json!("d1"));
    delete_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn unparseable_body_surfaces_the_transport_error() -> Result<()> {
    let server = MockServer::start_async().await;
    let token = common::jwt_expiring_in(3600);

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/solutions/sandbox/devices");
            then.status(200).body("not json at all");
        })
        .await;

    let service = common::token_service(&server, &token);
    let err = service.get_devices().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    Ok(())
}
