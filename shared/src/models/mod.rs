//! Data models
//!
//! Shared between the client crates and the backend API (JSON wire shapes).
//! Entity IDs are server-assigned UUIDs; create/update payloads carry
//! `validator` derives where the backend enforces the same rules.

pub mod auth;
pub mod branch;
pub mod category;
pub mod company;
pub mod employee;
pub mod product;
pub mod record;
pub mod schedule;
pub mod social;

// Re-exports
pub use auth::*;
pub use branch::*;
pub use category::*;
pub use company::*;
pub use employee::*;
pub use product::*;
pub use record::*;
pub use schedule::*;
pub use social::*;
