use sea_orm::entity::prelude::*;

/// Order header. `passcode` holds the Argon2 PHC hash, never the plaintext.
/// The three `paid_*` columns are written together exactly once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: String,
    pub address: String,
    pub passcode: Option<String>,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub paid_bank: Option<String>,
    pub paid_account_number: Option<String>,
    pub grand_total: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_details::Entity")]
    OrderDetails,
}

impl Related<super::order_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
