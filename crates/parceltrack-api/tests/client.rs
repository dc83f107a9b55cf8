//! HTTP-level tests for ApiClient against a mock backend

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use parceltrack_api::{ApiClient, NewDelivery, StatusUpdate};
use parceltrack_core::{DeliveryFilter, DeliveryStatus, Error};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

fn sample_delivery(tracking_code: &str, status: &str) -> serde_json::Value {
    json!({
        "trackingCode": tracking_code,
        "customerId": "cust-001",
        "customerEmail": "jo@example.com",
        "weightKg": 2.5,
        "origin": "Warehouse A",
        "destination": "City B",
        "status": status,
        "createdDate": "2025-08-04T10:00:00Z",
        "cost": 18.5
    })
}

#[tokio::test]
async fn create_delivery_decodes_created_record() {
    let server = MockServer::start().await;
    let request = NewDelivery {
        customer_id: "cust-001".to_string(),
        customer_email: "jo@example.com".to_string(),
        weight_kg: 2.5,
        origin: Some("Warehouse A".to_string()),
        destination: Some("City B".to_string()),
        description: None,
    };

    Mock::given(method("POST"))
        .and(path("/deliveries"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_delivery("TRK-1", "PENDING")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server).create_delivery(&request).await.unwrap();
    assert_eq!(created.tracking_code, "TRK-1");
    assert_eq!(created.status, DeliveryStatus::Pending);
    assert_eq!(created.cost, 18.5);
}

#[tokio::test]
async fn list_sends_only_non_empty_filter_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliveries"))
        .and(query_param("status", "DELIVERED"))
        .and(query_param("customerId", "cust-001"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_delivery("TRK-2", "DELIVERED")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let filter = DeliveryFilter {
        status: Some(DeliveryStatus::Delivered),
        customer_id: "cust-001".to_string(),
    };
    let rows = client(&server).list_deliveries(&filter).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tracking_code, "TRK-2");
}

#[tokio::test]
async fn list_without_filter_sends_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliveries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = client(&server)
        .list_deliveries(&DeliveryFilter::default())
        .await
        .unwrap();
    assert!(rows.is_empty());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn update_status_patches_encoded_path() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/deliveries/TRK-3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sample_delivery("TRK-3", "IN_TRANSIT")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let update = StatusUpdate {
        status: DeliveryStatus::InTransit,
        delivered_date: None,
    };
    let updated = client(&server).update_status("TRK-3", &update).await.unwrap();
    assert_eq!(updated.status, DeliveryStatus::InTransit);
}

#[tokio::test]
async fn http_404_without_body_displays_bare_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server).summary().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404");
    assert!(matches!(err, Error::Http { status: 404, .. }));
}

#[tokio::test]
async fn http_400_with_message_body_appends_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/deliveries"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "invalid weight"})),
        )
        .mount(&server)
        .await;

    let request = NewDelivery {
        customer_id: "cust-001".to_string(),
        customer_email: "jo@example.com".to_string(),
        weight_kg: -1.0,
        origin: None,
        destination: None,
        description: None,
    };
    let err = client(&server).create_delivery(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 400 - invalid weight");
}

#[tokio::test]
async fn http_error_with_unparseable_body_falls_back_to_bare_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/monitor"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server).monitor().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn summary_and_monitor_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalDeliveries": 3,
            "averageCost": 21.42,
            "statusBreakdown": {"pending": 1, "inTransit": 1, "delivered": 1}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/monitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"trackingCode": "TRK-1", "carrier": "FastShip", "location": "Hub 7",
             "timestamp": "2025-08-04T11:00:00Z", "status": "IN_TRANSIT"},
            {"trackingCode": "TRK-2", "carrier": "GlobalEx"}
        ])))
        .mount(&server)
        .await;

    let api = client(&server);
    let summary = api.summary().await.unwrap();
    assert_eq!(summary.total_deliveries, 3);
    assert_eq!(summary.status_breakdown.delivered, 1);

    // Server order preserved; partially-populated items tolerated.
    let events = api.monitor().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].carrier, "FastShip");
    assert_eq!(events[1].location, "");
}

#[tokio::test]
async fn create_then_list_includes_new_code_exactly_once() {
    let server = MockServer::start().await;
    let request = NewDelivery {
        customer_id: "cust-009".to_string(),
        customer_email: "kim@example.com".to_string(),
        weight_kg: 4.0,
        origin: None,
        destination: None,
        description: None,
    };

    Mock::given(method("POST"))
        .and(path("/deliveries"))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_delivery("TRK-9", "PENDING")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/deliveries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_delivery("TRK-8", "DELIVERED"),
            sample_delivery("TRK-9", "PENDING")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let created = api.create_delivery(&request).await.unwrap();
    let rows = api.list_deliveries(&DeliveryFilter::default()).await.unwrap();
    let matches: Vec<_> = rows
        .iter()
        .filter(|d| d.tracking_code == created.tracking_code)
        .collect();
    assert_eq!(matches.len(), 1);
}

#[tokio::test]
async fn connection_failure_is_a_request_error() {
    // Port 1 is never listening.
    let api = ApiClient::new("http://127.0.0.1:1", Duration::from_millis(500)).unwrap();
    let err = api.summary().await.unwrap_err();
    assert!(matches!(err, Error::Request { .. }));
}

#[tokio::test]
async fn requests_carry_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalDeliveries": 0,
            "averageCost": 0.0,
            "statusBreakdown": {"pending": 0, "inTransit": 0, "delivered": 0}
        })))
        .mount(&server)
        .await;

    client(&server).summary().await.unwrap();

    let received: Vec<Request> = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(content_type, Some("application/json"));
}
