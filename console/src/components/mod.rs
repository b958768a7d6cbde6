//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are resource-agnostic primitives (table, form, modal, banner)
//! plus the admin shell. Pages compose them and own all data fetching.

pub mod data_table;
pub mod error_banner;
pub mod form_builder;
pub mod layout;
pub mod modal;
pub mod pager;
