use sea_orm::entity::prelude::*;

/// Append-only disposal event. The business_id is denormalized from the
/// submitting user at insert time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "waste_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub log_id: i32,
    pub user_id: String,
    pub business_id: String,
    pub waste_type: String,
    pub weight: f64,
    pub location: String,
    pub trash_image_link: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
