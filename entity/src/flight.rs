use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub flight_num: i64,
    pub serial_number: i64,
    pub origin: String,
    pub destination: String,
    pub arrival_time: String,
    pub departure_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airplane::Entity",
        from = "Column::SerialNumber",
        to = "super::airplane::Column::SerialNumber"
    )]
    Airplane,
    #[sea_orm(has_many = "super::flight_crew::Entity")]
    FlightCrew,
    #[sea_orm(has_many = "super::flight_path::Entity")]
    FlightPath,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::airplane::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airplane.def()
    }
}

impl Related<super::flight_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightCrew.def()
    }
}

impl Related<super::flight_path::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightPath.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
