//! URL shortener service

pub mod database;
pub mod handler;
pub mod id;
pub mod model;
pub mod route;
