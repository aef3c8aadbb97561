// portal-client/tests/client_integration.rs

use portal_client::{ApiResponse, ClientConfig, Paginated};
use shared::models::{Notification, NotificationKind};

#[tokio::test]
async fn test_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, 30);
    assert!(config.token.is_none());
}

#[tokio::test]
async fn test_config_builder() {
    let config = ClientConfig::new("https://api.example.com/")
        .with_token("jwt-token")
        .with_timeout(10);

    assert_eq!(config.base_url, "https://api.example.com/");
    assert_eq!(config.token.as_deref(), Some("jwt-token"));
    assert_eq!(config.timeout, 10);
}

#[tokio::test]
async fn test_client_token_access() {
    let client = ClientConfig::new("http://localhost:8080").build_http_client();
    assert!(client.token().is_none());

    let client = client.with_token("jwt-token");
    assert_eq!(client.token(), Some("jwt-token"));
}

#[tokio::test]
async fn test_notification_page_envelope_decodes() {
    let json = r#"{
        "code": "E0000",
        "message": "Success",
        "data": {
            "items": [{
                "id": "ntf-1",
                "sender": { "id": "usr-1", "name": "Dana", "image": null },
                "receiver": null,
                "title": "New booking",
                "message": "Dana booked Plumbing",
                "kind": "BOOKING_CREATED",
                "is_read": false,
                "created_at": "2026-08-01T09:30:00Z"
            }],
            "pagination": { "page": 1, "per_page": 10, "total": 1, "pages": 1 }
        }
    }"#;

    let resp: ApiResponse<Paginated<Notification>> = serde_json::from_str(json).unwrap();
    let page = resp.data.unwrap();
    assert_eq!(page.items[0].kind, NotificationKind::BookingCreated);
    assert_eq!(page.pagination.pages, 1);
}

#[tokio::test]
async fn test_malformed_page_envelope_is_rejected() {
    // Items present but pagination replaced by a legacy flat field: the
    // canonical shape is the only one read.
    let json = r#"{
        "code": "E0000",
        "message": "Success",
        "data": { "items": [], "totalPages": 4 }
    }"#;

    let resp: Result<ApiResponse<Paginated<Notification>>, _> = serde_json::from_str(json);
    assert!(resp.is_err());
}
