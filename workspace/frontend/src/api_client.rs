pub mod dashboard;

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use crate::settings;

/// Error types for backend requests
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Request(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        let err = ApiError::Status(response.status());
        log::error!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let body: T = response
        .json()
        .await
        .map_err(|e| {
            let err = ApiError::Parse(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(
            ApiError::Parse("expected value".to_string()).to_string(),
            "Failed to parse response: expected value"
        );
        assert_eq!(
            ApiError::Request("NetworkError".to_string()).to_string(),
            "Request failed: NetworkError"
        );
    }
}
