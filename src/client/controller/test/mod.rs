use serde_json::json;

use crate::{
    client::{
        api::server::ServerAction,
        controller::{
            form::{CreateServerForm, LoginForm, PasswordForm, RegisterForm},
            ViewError,
        },
        model::{
            error::ApiError,
            screen::{Dashboard, Screen},
        },
        test_utils::{factory, TestBuilder},
    },
    model::user::AccessLevel,
};

mod start;
