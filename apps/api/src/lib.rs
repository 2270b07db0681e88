//! CareerPath API — hosts the career assessment wizard, recommendation
//! generation, career exploration catalog, and the chat relay.

pub mod assessment;
pub mod chat;
pub mod config;
pub mod errors;
pub mod explore;
pub mod generation;
pub mod models;
pub mod notify;
pub mod routes;
pub mod sessions;
pub mod state;
