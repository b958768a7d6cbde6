//! Browser task spawning.
//!
//! Page handlers only fire in the hydrated client; the server render never
//! awaits backend calls, so the future is dropped there.

use std::future::Future;

/// Run `fut` on the browser's local executor.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
