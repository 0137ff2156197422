use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub full_name: String,
    pub date_of_birth: Option<Date>,
    pub nickname: String,
    pub teaser_description: String,
    pub profile_photo_url: String,
    pub verification_video_url: String,
    pub is_verified: bool,
    pub total_xp: i32,
    pub is_matched: bool,
    pub home_latitude: Option<f64>,
    pub home_longitude: Option<f64>,
    #[sea_orm(indexed)]
    pub external_id: String,
    #[sea_orm(indexed)]
    pub is_service_account: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
