use serde_json::json;

use crate::{
    client::{
        api::{
            helper::{path_segment, with_query},
            server::ServerAction,
            transport::Method,
        },
        model::error::ApiError,
        test_utils::{factory, TestBuilder},
    },
    model::{
        server::ServerInfo,
        user::{AccessLevel, ParseAccessLevelError},
    },
};

mod account;
mod version;
