use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateProfileParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod find_by_id;
mod soft_delete;
mod update_profile;

fn create_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Reader".to_string(),
        email: email.to_string(),
        password: "$2b$12$hash".to_string(),
        avatar: None,
        phone: None,
        address: None,
    }
}
