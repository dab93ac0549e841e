use yew::Callback;

use crate::services::logging::Logger;

/// Requests navigation to an app path.
///
/// Cards only request navigation; what the route does afterwards lives
/// outside this crate.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    on_navigate: Callback<String>,
}

impl Navigator {
    pub fn new(on_navigate: Callback<String>) -> Self {
        Self { on_navigate }
    }

    /// Navigator backed by `window.location`
    pub fn browser() -> Self {
        Self::new(Callback::from(|path: String| {
            let Some(window) = web_sys::window() else {
                Logger::error_with_component("navigator", "No window available for navigation");
                return;
            };
            if let Err(e) = window.location().set_href(&path) {
                Logger::error_with_component(
                    "navigator",
                    &format!("Failed to navigate to {}: {:?}", path, e),
                );
            }
        }))
    }

    /// Navigator that drops every request
    #[cfg(test)]
    pub fn noop() -> Self {
        Self::new(Callback::noop())
    }

    pub fn navigate(&self, path: &str) {
        self.on_navigate.emit(path.to_string());
    }
}
