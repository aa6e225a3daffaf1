//! To-do list service

pub mod database;
pub mod handler;
pub mod model;
pub mod route;
