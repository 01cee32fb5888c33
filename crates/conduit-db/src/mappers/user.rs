//! User model -> entity mapper

use conduit_core::{User, UserId};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            email: model.email,
            bio: model.bio,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
