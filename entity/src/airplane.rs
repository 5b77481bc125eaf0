use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "airplane")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub serial_number: i64,
    pub manufacturer: String,
    pub model_number: String,
    pub type_rating: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
