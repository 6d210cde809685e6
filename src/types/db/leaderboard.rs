use sea_orm::entity::prelude::*;

/// One row per business, maintained by an external aggregation process.
/// This service only reads these rows. seasonal_waste is stored as text
/// and coerced to a number when ranking.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leaderboards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub business_id: String,
    pub company_name: Option<String>,
    pub seasonal_waste: String,
    pub last_season_reset: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
