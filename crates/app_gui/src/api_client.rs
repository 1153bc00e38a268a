//! Production `DogApi` implementation backed by the public dog.ceo service.

use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

use doggy_core::{ApiError, DogApi};
use serde::Deserialize;

const DEFAULT_BASE: &str = "https://dog.ceo/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// dog.ceo wraps every body in `{ "message": ..., "status": "success" }`.
#[derive(Deserialize)]
struct BreedListPayload {
    message: BTreeMap<String, Vec<String>>,
    status: String,
}

#[derive(Deserialize)]
struct BreedImagesPayload {
    message: Vec<String>,
    status: String,
}

pub struct DogCeoClient {
    base: String,
    http: reqwest::blocking::Client,
}

impl DogCeoClient {
    pub fn new(base: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            base: base.into(),
            http,
        }
    }

    /// Base URL from `DOGGY_API_BASE`, falling back to the public service.
    pub fn from_env() -> Self {
        Self::new(env::var("DOGGY_API_BASE").unwrap_or_else(|_| DEFAULT_BASE.to_string()))
    }

    fn get(&self, path: &str) -> Result<String, ApiError> {
        let url = format!("{}/{}", self.base.trim_end_matches('/'), path);
        tracing::debug!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.to_string()));
        }
        resp.text().map_err(|e| ApiError::Network(e.to_string()))
    }
}

impl DogApi for DogCeoClient {
    fn fetch_breeds(&self) -> Result<Vec<String>, ApiError> {
        parse_breeds(&self.get("breeds/list/all")?)
    }

    fn fetch_images_for_breed(&self, breed: &str) -> Result<Vec<String>, ApiError> {
        let path = format!("breed/{}/images", urlencoding::encode(breed));
        parse_images(&self.get(&path)?)
    }
}

/// The breed list arrives as a map of breed to sub-breeds. Map keys carry no
/// order on the wire, so the sorted key order is the served order.
fn parse_breeds(body: &str) -> Result<Vec<String>, ApiError> {
    let payload: BreedListPayload =
        serde_json::from_str(body).map_err(|e| ApiError::Payload(e.to_string()))?;
    if payload.status != "success" {
        return Err(ApiError::Status(payload.status));
    }
    Ok(payload.message.into_keys().collect())
}

fn parse_images(body: &str) -> Result<Vec<String>, ApiError> {
    let payload: BreedImagesPayload =
        serde_json::from_str(body).map_err(|e| ApiError::Payload(e.to_string()))?;
    if payload.status != "success" {
        return Err(ApiError::Status(payload.status));
    }
    Ok(payload.message)
}
