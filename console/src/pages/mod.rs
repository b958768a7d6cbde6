//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its snapshot, cursor, and dialog state, calls one resource
//! façade, and delegates rendering to `components`. Form-to-payload mapping
//! lives in plain functions next to each page so it can be unit tested.

pub(crate) mod forms;
pub mod login;
pub mod permissions;
pub mod progress;
pub mod roles;
pub mod users;
