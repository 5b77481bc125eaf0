use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::ResponseStatus, lenient::deserialize_optional_i64};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAirplaneDto {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub serial_number: Option<i64>,
    pub manufacturer: Option<String>,
    pub model_number: Option<String>,
    pub type_rating: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirplaneCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    pub id: i64,
}
