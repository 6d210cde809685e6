use sea_orm::entity::prelude::*;

/// A business is the tenancy boundary. Invite codes are handed out
/// out-of-band and consumed by the signup flow.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "businesses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub business_id: String,
    pub company_name: String,
    pub employee_invite_code: String,
    pub admin_invite_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
