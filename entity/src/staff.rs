use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub surname: String,
    pub salary: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contact::Entity")]
    Contact,
    #[sea_orm(has_one = "super::pilot::Entity")]
    Pilot,
    #[sea_orm(has_many = "super::flight_crew::Entity")]
    FlightCrew,
}

impl Related<super::contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contact.def()
    }
}

impl Related<super::pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl Related<super::flight_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightCrew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
