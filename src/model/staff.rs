use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::ResponseStatus, lenient::deserialize_optional_f64};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffDto {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub salary: Option<f64>,
    pub home_address: Option<String>,
    pub work_address: Option<String>,
    pub home_phone_num: Option<String>,
    pub work_phone_num: Option<String>,
}

/// Response for a created staff member; `id` is the generated staff ID.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaffCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePilotDto {
    #[serde(rename = "staffID")]
    pub staff_id: Option<String>,
    #[serde(rename = "typeRating")]
    pub type_rating: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PilotCreatedDto {
    pub message: String,
    pub status: ResponseStatus,
    pub id: String,
}
