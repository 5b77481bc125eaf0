use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "passenger")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub surname: String,
    /// Argon2id hash in PHC string format
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::passenger_contact::Entity")]
    PassengerContact,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::passenger_contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PassengerContact.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
