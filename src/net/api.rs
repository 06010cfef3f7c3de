//! REST calls against the hotel directory backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] so pages and
//! tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Authenticated calls never touch
//! the session themselves; pages hand failures to
//! [`crate::state::auth::check_api_error`], which clears the session on
//! 401/403.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::Token;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::CsvUploadSummary;
use super::types::{Credentials, Hotel, LoginResponse, NewHotel, Registration, UserCheck, UserProfile};
use crate::config::AppConfig;

#[cfg(any(test, feature = "csr"))]
fn check_user_path(user_name: &str) -> String {
    format!("/auth/check-user/{}", urlencoding::encode(user_name))
}

#[cfg(any(test, feature = "csr"))]
fn approve_user_path(user_id: &str) -> String {
    format!("/auth/approve-user/{}", urlencoding::encode(user_id))
}

#[cfg(any(test, feature = "csr"))]
fn reject_user_path(user_id: &str) -> String {
    format!("/auth/reject-user/{}", urlencoding::encode(user_id))
}

#[cfg(any(test, feature = "csr"))]
fn hotel_path(hotel_id: &str) -> String {
    format!("/hotels/{}", urlencoding::encode(hotel_id))
}

#[cfg(any(test, feature = "csr"))]
fn hotel_search_path(name: &str) -> String {
    format!("/hotels/search?name={}", urlencoding::encode(name))
}

/// HTTP helpers shared by every browser call.
#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;

    pub(super) async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("api: reading error body for {status} failed: {e}");
                String::new()
            }
        };
        log::warn!("api: {} {} -> {status}", resp.url(), resp.status_text());
        Err(ApiError::from_status(status, &body))
    }

    pub(super) async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Handle to the backend, provided as context by the root component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    fn get(&self, path: &str, token: Option<&Token>) -> gloo_net::http::RequestBuilder {
        authorize(gloo_net::http::Request::get(&self.config.url(path)), token)
    }

    #[cfg(feature = "csr")]
    fn post(&self, path: &str, token: Option<&Token>) -> gloo_net::http::RequestBuilder {
        authorize(gloo_net::http::Request::post(&self.config.url(path)), token)
    }

    #[cfg(feature = "csr")]
    fn delete(&self, path: &str, token: &Token) -> gloo_net::http::RequestBuilder {
        authorize(gloo_net::http::Request::delete(&self.config.url(path)), Some(token))
    }

    // =============================================================
    // Auth
    // =============================================================

    /// Ask whether an account exists and may sign in, before sending a
    /// password.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is malformed.
    pub async fn check_user(&self, user_name: &str) -> Result<UserCheck, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.get(&check_user_path(user_name), None).build()).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user_name;
            Err(ApiError::Unavailable)
        }
    }

    /// Exchange credentials for a token and profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; 401 and 403 arrive as
    /// [`ApiError::Unauthorized`].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.post("/auth/login", None).json(credentials)).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// Confirm the backend accepts `token`. Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the token is rejected or the call fails.
    pub async fn validate_token(&self, token: &Token) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.get("/auth/validate", Some(token)).build()).await?;
            resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    /// Submit a travel-agency registration for admin approval.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the backend rejects the registration.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            http::send(self.post("/auth/register", None).json(registration)).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
            Err(ApiError::Unavailable)
        }
    }

    // =============================================================
    // Users (admin)
    // =============================================================

    /// Registrations waiting for approval.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn pending_approvals(&self, token: &Token) -> Result<Vec<UserProfile>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.get("/auth/pending-approvals", Some(token)).build()).await?;
            http::json::<Option<Vec<UserProfile>>>(resp).await.map(Option::unwrap_or_default)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    /// Approve a pending registration.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn approve_user(&self, token: &Token, user_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            http::send(self.post(&approve_user_path(user_id), Some(token)).json(&serde_json::json!({}))).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, user_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Reject (delete) a pending registration.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn reject_user(&self, token: &Token, user_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            http::send(self.delete(&reject_user_path(user_id), token).build()).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, user_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Every registered account.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn list_users(&self, token: &Token) -> Result<Vec<UserProfile>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.get("/auth/users", Some(token)).build()).await?;
            http::json::<Option<Vec<UserProfile>>>(resp).await.map(Option::unwrap_or_default)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    /// Server-generated CSV export of all accounts.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn download_users_csv(&self, token: &Token) -> Result<Vec<u8>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.get("/auth/users/download-csv", Some(token)).build()).await?;
            resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    // =============================================================
    // Hotels
    // =============================================================

    /// The full hotel directory.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn list_hotels(&self, token: &Token) -> Result<Vec<Hotel>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.get("/hotels/all", Some(token)).build()).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    /// Hotels whose name matches `name` (server-side search).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn search_hotels(&self, token: &Token, name: &str) -> Result<Vec<Hotel>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.get(&hotel_search_path(name), Some(token)).build()).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, name);
            Err(ApiError::Unavailable)
        }
    }

    /// A single hotel.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for unknown ids, or another
    /// [`ApiError`] if the request fails.
    pub async fn get_hotel(&self, token: &Token, hotel_id: &str) -> Result<Hotel, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = http::send(self.get(&hotel_path(hotel_id), Some(token)).build()).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, hotel_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Create a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the backend rejects the data
    /// (for example a duplicate), or another [`ApiError`].
    pub async fn add_hotel(&self, token: &Token, hotel: &NewHotel) -> Result<Hotel, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = self.post("/hotels/add", Some(token)).header("Accept", "application/json");
            let resp = http::send(builder.json(hotel)).await?;
            http::json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, hotel);
            Err(ApiError::Unavailable)
        }
    }

    /// Delete a hotel.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete_hotel(&self, token: &Token, hotel_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            http::send(self.delete(&hotel_path(hotel_id), token).build()).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, hotel_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Bulk-import hotels from a user-selected CSV file (multipart `file`).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the form cannot be built or the upload fails.
    #[cfg(feature = "csr")]
    pub async fn upload_hotels_csv(&self, token: &Token, file: &web_sys::File) -> Result<CsvUploadSummary, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let resp = http::send(self.post("/hotels/upload-csv", Some(token)).body(form)).await?;
        http::json(resp).await
    }
}

#[cfg(feature = "csr")]
fn authorize(builder: gloo_net::http::RequestBuilder, token: Option<&Token>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &token.bearer()),
        None => builder,
    }
}

/// The [`ApiClient`] provided by the root component.
pub fn use_api() -> ApiClient {
    leptos::prelude::expect_context::<ApiClient>()
}
