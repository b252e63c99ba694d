//! Destination models and DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;
use datapusher_core::http_method::{HttpMethod, UnsupportedMethod};
use datapusher_core::types::{DbId, Timestamp};

/// Header name to value mapping sent with every delivery to a destination.
pub type HeaderMapping = BTreeMap<String, String>;

/// A row from the `destinations` table.
///
/// `http_method` is kept as the stored string so rows written before method
/// validation existed still load; use [`Destination::method`] to interpret it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Destination {
    pub id: DbId,
    pub account_id: DbId,
    pub url: String,
    pub http_method: String,
    pub headers: Json<HeaderMapping>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Destination {
    /// Parse the stored method.
    pub fn method(&self) -> Result<HttpMethod, UnsupportedMethod> {
        self.http_method.parse()
    }
}

/// DTO for creating a new destination.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDestination {
    pub account_id: DbId,
    #[validate(url)]
    pub url: String,
    pub http_method: HttpMethod,
    #[serde(default)]
    pub headers: HeaderMapping,
}

/// DTO for updating an existing destination. The owning account is fixed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDestination {
    #[validate(url)]
    pub url: Option<String>,
    pub http_method: Option<HttpMethod>,
    pub headers: Option<HeaderMapping>,
}
