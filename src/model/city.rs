use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::ResponseStatus, lenient::deserialize_optional_i64};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCityDto {
    /// Optional; assigned by the database when omitted.
    #[serde(
        rename = "cityID",
        default,
        deserialize_with = "deserialize_optional_i64"
    )]
    pub city_id: Option<i64>,
    #[serde(rename = "cityName")]
    pub city_name: Option<String>,
    #[serde(rename = "cityCountry")]
    pub city_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    pub id: i32,
}
