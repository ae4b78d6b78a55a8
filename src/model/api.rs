use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Query parameters shared by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number (default: 1)
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    /// Items per page (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> u64 {
    10
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}
