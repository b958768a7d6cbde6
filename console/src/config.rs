//! Console configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so values are baked
//! in with `option_env!` when the crate is compiled. Parsing goes through a
//! lookup closure so tests can feed arbitrary values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Typed console settings shared through Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Backend base URL without a trailing slash.
    pub api_base_url: String,
    /// Rows requested per page on list screens.
    pub page_size: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), page_size: DEFAULT_PAGE_SIZE }
    }
}

impl ConsoleConfig {
    /// Build config from values captured at compile time.
    ///
    /// - `HABITHIVE_API_URL`: backend base URL (default `http://localhost:8080/api`)
    /// - `HABITHIVE_PAGE_SIZE`: rows per page (default 25)
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "HABITHIVE_API_URL" => option_env!("HABITHIVE_API_URL").map(str::to_owned),
            "HABITHIVE_PAGE_SIZE" => option_env!("HABITHIVE_PAGE_SIZE").map(str::to_owned),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup. Invalid or empty values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("HABITHIVE_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let page_size = lookup("HABITHIVE_PAGE_SIZE")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { api_base_url, page_size }
    }
}
