use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub passenger_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub flight_num: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::passenger::Entity",
        from = "Column::PassengerId",
        to = "super::passenger::Column::Id"
    )]
    Passenger,
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightNum",
        to = "super::flight::Column::FlightNum"
    )]
    Flight,
}

impl Related<super::passenger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passenger.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
