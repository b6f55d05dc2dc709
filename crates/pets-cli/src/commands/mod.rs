//! CLI command handlers

pub mod add;
pub mod catalog;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;
