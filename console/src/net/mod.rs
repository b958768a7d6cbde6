//! Networking modules for the HabitHive REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` prepares requests and normalizes responses, `transport` performs
//! the browser call, `types` defines the wire schema, and one façade module per
//! backend resource exposes typed route methods.

pub mod auth;
pub mod client;
pub mod error;
pub mod permissions;
pub mod progress;
pub mod roles;
pub mod transport;
pub mod types;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;
