//! Client-side state shared through Leptos context or owned per page.
//!
//! DESIGN
//! ======
//! Session identity (`auth`) lives for the whole app; record snapshots
//! (`snapshot`) belong to a single page instance and die with it.

pub mod auth;
pub mod dialog;
pub mod snapshot;
