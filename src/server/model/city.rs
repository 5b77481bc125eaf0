use crate::{
    model::{
        api::ResponseStatus,
        city::{CityCreatedDto, CreateCityDto},
    },
    server::{
        error::AppError,
        util::validate::{non_blank, non_zero},
    },
};

/// City that flights can route through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub country: String,
}

impl City {
    pub fn from_entity(entity: entity::inter_city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            country: entity.country,
        }
    }

    pub fn into_created_dto(self) -> CityCreatedDto {
        CityCreatedDto {
            message: "City added successfully".to_string(),
            status: ResponseStatus::Success,
            id: self.id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCityParams {
    /// Explicit city ID; the database assigns one when `None`.
    pub id: Option<i32>,
    pub name: String,
    pub country: String,
}

impl CreateCityParams {
    pub fn from_dto(dto: CreateCityDto) -> Result<Self, AppError> {
        let name = non_blank(dto.city_name).ok_or_else(AppError::missing_fields)?;
        let country = non_blank(dto.city_country).ok_or_else(AppError::missing_fields)?;

        let id = non_zero(dto.city_id)
            .map(i32::try_from)
            .transpose()
            .map_err(|_| AppError::BadRequest("cityID is out of range".to_string()))?;

        Ok(Self { id, name, country })
    }
}
