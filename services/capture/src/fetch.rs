//! Sensor HTTP client.
//!
//! One blocking GET against the device's frame endpoint, which answers with
//! a JSON array of 768 temperature readings. No retry; a failed fetch is
//! reported by the caller and the run moves on to rendering.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

/// Fetch failure, carrying the observed status or decode reason.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("sensor returned HTTP {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid frame body: {0}")]
    Decode(String),
}

/// Blocking client for the sensor's frame endpoint.
pub struct SensorClient {
    client: Client,
    url: String,
}

impl SensorClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    /// Fetch one frame of readings.
    ///
    /// Requires a success status and a body that decodes as a JSON array of
    /// numbers. The array length is not validated here; a short or long
    /// frame surfaces as a reshape failure at render time.
    pub fn fetch_frame(&self) -> Result<Vec<f32>, FetchError> {
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        parse_frame_body(&body)
    }
}

/// Decode a frame response body into readings.
pub fn parse_frame_body(body: &str) -> Result<Vec<f32>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
