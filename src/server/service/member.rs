use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::{member::MemberError, AppError},
    model::member::{CreateMemberParams, Member, UpdateMemberParams},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member after checking the name is present and unused
    pub async fn join(&self, params: CreateMemberParams) -> Result<Member, AppError> {
        params.validate()?;

        let repo = MemberRepository::new(self.db);

        if repo.count_by_name(&params.name).await? > 0 {
            return Err(MemberError::DuplicateName(params.name).into());
        }

        let member = repo.create(params).await?;

        tracing::info!("Member {} joined as '{}'", member.id, member.name);

        Ok(Member::from_entity(member))
    }

    /// Renames a member and returns it as stored after the update
    pub async fn update(&self, params: UpdateMemberParams) -> Result<Member, AppError> {
        params.validate()?;

        let repo = MemberRepository::new(self.db);

        if !repo.update_name(params.id, params.name).await? {
            return Err(AppError::NotFound(format!("Member {} not found", params.id)));
        }

        repo.find_by_id(params.id)
            .await?
            .map(Member::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", params.id)))
    }

    pub async fn find_one(&self, id: i32) -> Result<Option<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.find_by_id(id).await?.map(Member::from_entity))
    }

    pub async fn find_members(&self) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo
            .find_all()
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect())
    }

    /// Members exactly as stored, for the entity-exposing endpoint
    pub async fn find_member_entities(&self) -> Result<Vec<entity::member::Model>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.find_all().await?)
    }
}
