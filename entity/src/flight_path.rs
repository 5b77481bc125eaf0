use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_path")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub flight_num: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub city_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightNum",
        to = "super::flight::Column::FlightNum"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::inter_city::Entity",
        from = "Column::CityId",
        to = "super::inter_city::Column::Id"
    )]
    InterCity,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::inter_city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterCity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
