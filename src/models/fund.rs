use serde::{Deserialize, Serialize};

/// Fund record as stored in the backend's `funds` table (snake_case schema).
#[derive(Debug, Clone, Deserialize)]
pub struct FundRecord {
    pub code: String,
    pub name: String,
    pub current_value: f64,
    pub accumulated_value: f64,
    pub daily_change: f64,
    pub change_percent: f64,
    pub is_monitoring: bool,
    pub update_time: Option<String>,
    pub status: String,
}

/// Public projection returned by the listing endpoint (camelCase schema).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub code: String,
    pub name: String,
    pub current_value: f64,
    pub accumulated_value: f64,
    pub daily_change: f64,
    pub change_percent: f64,
    pub is_monitoring: bool,
    pub update_time: Option<String>,
    pub status: String,
}

// Naming-convention change only; values pass through untouched.
impl From<FundRecord> for Fund {
    fn from(record: FundRecord) -> Self {
        Self {
            code: record.code,
            name: record.name,
            current_value: record.current_value,
            accumulated_value: record.accumulated_value,
            daily_change: record.daily_change,
            change_percent: record.change_percent,
            is_monitoring: record.is_monitoring,
            update_time: record.update_time,
            status: record.status,
        }
    }
}
