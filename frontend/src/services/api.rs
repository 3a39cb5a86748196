use gloo::net::http::Request;
use shared::{CreateMealRequest, Meal};
use thiserror::Error;

/// Failure modes of the meal API. Most callers do not branch on the variant;
/// they log the error or fall back to stale state.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {status}")]
    Server { status: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// API client for communicating with the backend server.
///
/// Every operation is a single round trip: no caching, no retry. Callers are
/// responsible for re-fetching the collection after a mutation.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full current meal collection
    pub async fn list_meals(&self) -> Result<Vec<Meal>, ApiError> {
        let url = format!("{}/api/meals", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Vec<Meal>>()
                        .await
                        .map_err(|e| ApiError::Decode(e.to_string()))
                } else {
                    Err(ApiError::Server {
                        status: response.status(),
                    })
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Submit a new meal; the server assigns the id. Not idempotent — a
    /// duplicate call creates a duplicate entry.
    pub async fn create_meal(&self, request: &CreateMealRequest) -> Result<Meal, ApiError> {
        let url = format!("{}/api/meals", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Meal>()
                        .await
                        .map_err(|e| ApiError::Decode(e.to_string()))
                } else {
                    Err(ApiError::Server {
                        status: response.status(),
                    })
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Delete one meal by id. A missing id surfaces as an ordinary failure.
    pub async fn delete_meal(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/api/meals/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(ApiError::Server {
                        status: response.status(),
                    })
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Ask the server to regenerate the whole week. Destructive: the backend
    /// replaces the entire collection. The response body carries nothing the
    /// client needs beyond success or failure.
    pub async fn generate_plan(&self) -> Result<(), ApiError> {
        let url = format!("{}/api/meals/generate", self.base_url);

        match Request::post(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(ApiError::Server {
                        status: response.status(),
                    })
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
