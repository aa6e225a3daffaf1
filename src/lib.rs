//! Two small HTTP services over an embedded database
//!
//! - [`shorturl`]: hands out six-character short links and redirects them.
//! - [`todo`]: a to-do list with partial updates.
//!
//! Both share configuration, error handling and server plumbing.

pub mod config;
pub mod error;
pub mod server;
pub mod shorturl;
pub mod storage;
pub mod todo;
