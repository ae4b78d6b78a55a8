use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contact as sent and received over the wire.
///
/// Missing string fields deserialize as empty so that validation, rather than the JSON
/// extractor, reports which field is required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    /// Names of the groups the contact belongs to.
    #[serde(default)]
    pub group_names: Vec<String>,
}
