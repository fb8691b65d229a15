#![allow(dead_code)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use httpmock::MockServer;
use serde_json::json;
use starfish_sdk::{ServiceConfig, StarfishService};

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";

/// Compact JWT whose `exp` claim is `seconds` from now (negative for an
/// already-expired token). Signature is junk; the client never checks it.
pub fn jwt_expiring_in(seconds: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(json!({"alg": "HS256", "typ": "JWT"}).to_string());
    let payload = URL_SAFE_NO_PAD
        .encode(json!({"exp": Utc::now().timestamp() + seconds}).to_string());
    format!("{}.{}.signature", header, payload)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Service in credentials mode pointed at the mock server
pub fn credentials_service(server: &MockServer) -> StarfishService {
    init_logging();
    let config =
        ServiceConfig::with_credentials(server.base_url(), "sandbox", CLIENT_ID, CLIENT_SECRET)
            .unwrap();
    StarfishService::new(config)
}

/// Service in static-token mode pointed at the mock server
pub fn token_service(server: &MockServer, token: &str) -> StarfishService {
    init_logging();
    let config = ServiceConfig::with_token(server.base_url(), "sandbox", token).unwrap();
    StarfishService::new(config)
}

/// Mock `POST /tokens` to hand out the given token
pub async fn mock_token_endpoint<'a>(server: &'a MockServer, token: &str) -> httpmock::Mock<'a> {
    let token = token.to_string();
    server
        .mock_async(move |when, then| {
            when.method(httpmock::Method::POST)
                .path("/tokens")
                .header("accept", "application/json")
                .json_body(json!({"clientId": CLIENT_ID, "clientSecret": CLIENT_SECRET}));
            then.status(200).json_body(json!({"accessToken": token}));
        })
        .await
}
