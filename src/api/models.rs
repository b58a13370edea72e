use serde::{Deserialize, Serialize};

///
/// Standard success/failure envelope returned by every
/// mutating endpoint. Extra server keys are ignored.
///
#[derive(Debug, Clone, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleMarkRequest {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkPaidRequest {
    pub spended_by: String,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementRequest {
    pub spending_ids: Vec<i64>,
    pub spended_by: String,
    pub mode: String,
}
