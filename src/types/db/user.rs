use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub business_id: String,

    // Role flags
    pub is_admin: bool,
    pub is_owner: bool,

    // Credential material: per-user HMAC key and base64 HMAC-SHA256 digest
    pub secret: String,
    pub password_hash: String,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::waste_log::Entity")]
    WasteLog,
}

impl Related<super::waste_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WasteLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
