//! Integration tests

mod guard_tests;
mod roles_endpoint_tests;
