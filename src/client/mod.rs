pub mod api;
pub mod app;
pub mod component;
pub mod config;
pub mod constant;
pub mod controller;
pub mod model;
pub mod route;
pub mod store;

#[cfg(test)]
pub mod test_utils;

pub use app::App;
