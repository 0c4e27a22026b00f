use gloo_net::http::{Request, Response};
use log::info;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::AbortSignal;

use crate::config;
use crate::models::recipe_models::{RecipeEntry, RecipesPayload};
use crate::models::timeline_models::{TimelineEntry, TimelinePayload};

/// Ways a data load can fail. All of them render as "unavailable".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Entry point for the read-only requests this site makes.
pub struct Api;

/// Thin wrapper over a gloo request so every load goes through the same status and
/// decode handling.
pub struct RequestWrapper {
    request: Request,
    url: String,
}

impl RequestWrapper {
    fn new(url: String) -> Self {
        let request = Request::get(&url).header("Accept", "application/json");
        Self { request, url }
    }

    /// Tie the request to an abort signal so unmounting can cancel it.
    pub fn abort_signal(mut self, signal: Option<&AbortSignal>) -> Self {
        self.request = self.request.abort_signal(signal);
        self
    }

    pub async fn send(self) -> Result<Response, FetchError> {
        let response = self
            .request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        check_status(response.status())?;
        Ok(response)
    }

    /// Send and decode the body as `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        let url = self.url.clone();
        let response = self.send().await?;
        let body = response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        info!("Fetched {}", url);
        Ok(body)
    }
}

impl Api {
    /// GET a path on the backend.
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(format!("{}{}", config::get_backend_url(), path))
    }

    /// GET a static asset served alongside the app.
    pub fn asset(path: &str) -> RequestWrapper {
        RequestWrapper::new(path.to_string())
    }
}

pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

pub async fn load_timeline(signal: Option<AbortSignal>) -> Result<Vec<TimelineEntry>, FetchError> {
    let payload: TimelinePayload = Api::asset(config::TIMELINE_DATA_PATH)
        .abort_signal(signal.as_ref())
        .json()
        .await?;
    let entries = payload.into_entries();
    info!("Loaded {} timeline entries", entries.len());
    Ok(entries)
}

pub async fn load_recipes(signal: Option<AbortSignal>) -> Result<Vec<RecipeEntry>, FetchError> {
    let payload: RecipesPayload = Api::get(config::RECIPES_PATH)
        .abort_signal(signal.as_ref())
        .json()
        .await?;
    let entries = payload.into_entries();
    info!("Loaded {} recipes", entries.len());
    Ok(entries)
}
