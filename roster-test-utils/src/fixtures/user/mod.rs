//! User fixture utilities.
//!
//! Fixture users use fixed values derived from their id so tests can refer to them
//! without holding on to the inserted models.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

/// Email of the mock user with the given id.
pub fn mock_user_email(id: i32) -> String {
    format!("mock.user{}@example.com", id)
}

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert the mock user with the given id, see [`factory::mock_user_model`].
    pub async fn insert_mock_user(&self, id: i32) -> Result<UserModel, TestError> {
        let model = factory::mock_user_model(id);

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(model.id),
            name: ActiveValue::Set(model.name),
            email: ActiveValue::Set(model.email),
            email_verified_at: ActiveValue::Set(model.email_verified_at),
            password: ActiveValue::Set(model.password),
            remember_token: ActiveValue::Set(model.remember_token),
            created_at: ActiveValue::Set(model.created_at),
            updated_at: ActiveValue::Set(model.updated_at),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
