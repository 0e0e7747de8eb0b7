//! API integration tests

mod auth_test;
mod configs_test;
mod database_test;
mod public_test;
