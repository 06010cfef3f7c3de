//! Wire DTOs for the hotel directory backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Decoding is lenient where
//! the server is known to be loose (numeric or string ids, `null` strings)
//! so a single odd record does not fail a whole listing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use session::model::{deserialize_id, deserialize_null_string, deserialize_role};

pub use session::{Role, UserProfile};

/// A hotel directory entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub hotel_name: String,
    /// Primary contact email.
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub email1: String,
    #[serde(default)]
    pub email2: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub mobile_phone_contact: String,
    #[serde(default)]
    pub landline_contact: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub concerning_person_name: String,
    #[serde(default)]
    pub preferred: bool,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub city: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub state: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl Hotel {
    /// `"City, State"`, skipping whichever part is blank.
    pub fn location(&self) -> String {
        [self.city.trim(), self.state.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body for `POST /hotels/add`. Blank optional fields are sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub hotel_name: String,
    pub email1: String,
    pub email2: Option<String>,
    pub address: String,
    pub mobile_phone_contact: String,
    pub landline_contact: Option<String>,
    pub concerning_person_name: String,
    pub preferred: bool,
    pub city: String,
    pub state: String,
    pub website: Option<String>,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

/// Response of `POST /auth/login`. Both parts must be present to sign in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Response of `GET /auth/check-user/{userName}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserCheck {
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Option<Role>,
}

/// Body for `POST /auth/register`: a travel agency applying for an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub company_name: String,
    pub address: String,
    pub contact_number: String,
    pub mobile_number: String,
    pub email: String,
    pub user_name: String,
    pub password: String,
    pub concerning_person_name: String,
    pub city: String,
    pub state: String,
    pub website: String,
}

/// Response of `POST /hotels/upload-csv`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CsvUploadSummary {
    #[serde(default)]
    pub hotels: Vec<Hotel>,
}
