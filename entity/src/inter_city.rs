use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inter_city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_path::Entity")]
    FlightPath,
}

impl Related<super::flight_path::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightPath.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
