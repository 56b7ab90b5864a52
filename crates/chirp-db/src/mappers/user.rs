//! User entity <-> model mapper

use chirp_core::entities::{User, UserRef};

use crate::models::{UserModel, UserRefModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            secret_key: model.secret_key,
        }
    }
}

impl From<UserRefModel> for UserRef {
    fn from(model: UserRefModel) -> Self {
        UserRef {
            id: model.id,
            name: model.name,
        }
    }
}
