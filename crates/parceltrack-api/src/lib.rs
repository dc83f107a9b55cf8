//! parceltrack-api - HTTP client for the delivery-tracking backend
//!
//! Single chokepoint for all outbound calls. Every view routes through
//! [`ApiClient`] so error shaping is uniform: transport failures become
//! [`Error::Request`], non-2xx responses become [`Error::Http`] whose display
//! is `"HTTP <status>"` with an optional ` - <detail>` suffix taken from the
//! server's JSON error body. No retry, no backoff.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use parceltrack_core::prelude::*;
use parceltrack_core::{Delivery, DeliveryFilter, Summary, TrackingEvent};

/// Characters escaped when a tracking code is embedded as a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Request body for `POST /deliveries`.
///
/// The backend assigns the tracking code, the initial PENDING status and the
/// cost; none of those appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDelivery {
    pub customer_id: String,
    pub customer_email: String,
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for `PATCH /deliveries/{trackingCode}`.
///
/// `delivered_date` is only meaningful when the target status is DELIVERED
/// and is omitted from the wire when `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: parceltrack_core::DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_date: Option<String>,
}

/// Error body convention: non-2xx responses may carry `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client bound to a fixed base URL.
///
/// Cheap to clone; the underlying `reqwest::Client` is an Arc internally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slashes trimmed).
    ///
    /// An empty base URL is a configuration error, not a request error.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(Error::config("api base_url must not be empty"));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::request(e.to_string()))?;
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Absolute URL for a relative path.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Path builders
    // ─────────────────────────────────────────────────────────────

    /// `/deliveries` with query parameters built only from non-empty filter
    /// fields. An empty filter yields no query string at all.
    pub fn deliveries_path(filter: &DeliveryFilter) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(status) = filter.status {
            query.append_pair("status", status.as_str());
        }
        if !filter.customer_id.is_empty() {
            query.append_pair("customerId", &filter.customer_id);
        }
        let query = query.finish();
        if query.is_empty() {
            "/deliveries".to_string()
        } else {
            format!("/deliveries?{query}")
        }
    }

    /// `/deliveries/{trackingCode}` with the code percent-encoded.
    pub fn delivery_path(tracking_code: &str) -> String {
        format!(
            "/deliveries/{}",
            utf8_percent_encode(tracking_code, PATH_SEGMENT)
        )
    }

    pub fn summary_path() -> &'static str {
        "/summary"
    }

    pub fn monitor_path() -> &'static str {
        "/monitor"
    }

    // ─────────────────────────────────────────────────────────────
    // Typed endpoints
    // ─────────────────────────────────────────────────────────────

    /// `POST /deliveries` -- returns the created delivery with its
    /// server-assigned tracking code, PENDING status and computed cost.
    pub async fn create_delivery(&self, request: &NewDelivery) -> Result<Delivery> {
        self.post_json("/deliveries", request).await
    }

    /// `GET /deliveries?status=&customerId=`
    pub async fn list_deliveries(&self, filter: &DeliveryFilter) -> Result<Vec<Delivery>> {
        self.get_json(&Self::deliveries_path(filter)).await
    }

    /// `PATCH /deliveries/{trackingCode}` -- returns the updated delivery.
    pub async fn update_status(
        &self,
        tracking_code: &str,
        update: &StatusUpdate,
    ) -> Result<Delivery> {
        self.patch_json(&Self::delivery_path(tracking_code), update)
            .await
    }

    /// `GET /summary`
    pub async fn summary(&self) -> Result<Summary> {
        self.get_json(Self::summary_path()).await
    }

    /// `GET /monitor` -- carrier feed items in server order.
    pub async fn monitor(&self) -> Result<Vec<TrackingEvent>> {
        self.get_json(Self::monitor_path()).await
    }

    // ─────────────────────────────────────────────────────────────
    // Request plumbing
    // ─────────────────────────────────────────────────────────────

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {path}");
        let response = self
            .http
            .get(self.endpoint(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| Error::request(e.to_string()))?;
        decode_json_response(response).await
    }

    pub async fn post_json<Req, Res>(&self, path: &str, payload: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        debug!("POST {path}");
        let response = self
            .http
            .post(self.endpoint(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::request(e.to_string()))?;
        decode_json_response(response).await
    }

    pub async fn patch_json<Req, Res>(&self, path: &str, payload: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        debug!("PATCH {path}");
        let response = self
            .http
            .patch(self.endpoint(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::request(e.to_string()))?;
        decode_json_response(response).await
    }
}

/// Read a response body, shaping non-2xx statuses into [`Error::Http`].
///
/// Returns `Ok(None)` for 204 or an empty success body.
async fn read_body(response: reqwest::Response) -> Result<Option<Vec<u8>>> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::request(e.to_string()))?;

    if !status.is_success() {
        // Best effort: extract the server's message field; a body that is
        // absent or not JSON falls back to the bare status.
        let detail = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.message);
        warn!("HTTP {} from backend", status.as_u16());
        return Err(Error::http(status.as_u16(), detail.as_deref()));
    }

    if status == reqwest::StatusCode::NO_CONTENT || bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(bytes.to_vec()))
}

async fn decode_json_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    match read_body(response).await? {
        Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| Error::decode(e.to_string())),
        None => Err(Error::decode("empty response body")),
    }
}
