use serde::Serialize;

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub date: String,
    pub slot_id: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct PriceResponse {
    pub amount: i64,
    pub currency: String,
}
