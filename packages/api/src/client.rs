//! Typed wrappers over the HTTP API, shared by every frontend target.

use crate::models::{ConnectionTestResult, Item};

/// What can go wrong talking to the server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Base URL of the API server.
///
/// In the browser this is the origin the page was served from. Elsewhere it
/// can be pointed at a remote server with `ITEMVIEW_SERVER_URL`.
#[cfg(target_arch = "wasm32")]
fn api_base() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://127.0.0.1:8080".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn api_base() -> String {
    std::env::var("ITEMVIEW_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
}

/// Fetch every item. A non-2xx status is an error; the page renders it as
/// its failure state.
pub async fn fetch_items() -> Result<Vec<Item>, ClientError> {
    let response = reqwest::get(format!("{}/api/items", api_base())).await?;
    if !response.status().is_success() {
        return Err(ClientError::Status(response.status()));
    }
    Ok(response.json().await?)
}

/// Probe database connectivity through the server.
///
/// The endpoint answers with a [`ConnectionTestResult`] on success and
/// failure alike, so the body is decoded regardless of the status code.
pub async fn test_connection() -> Result<ConnectionTestResult, ClientError> {
    let response = reqwest::get(format!("{}/api/test-connection", api_base())).await?;
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_honors_the_server_url_override() {
        std::env::set_var("ITEMVIEW_SERVER_URL", "http://10.0.0.5:9000");
        assert_eq!(api_base(), "http://10.0.0.5:9000");

        std::env::remove_var("ITEMVIEW_SERVER_URL");
        assert!(api_base().starts_with("http://127.0.0.1"));
    }
}
