//! Path-based routing.
//!
//! Navigation happens through plain anchors, so each view is a full page load
//! that rehydrates the cart from storage.

use storefront::cart::ProductId;

/// Views reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,

    /// `/cart`
    Cart,

    /// `/<id>`
    Product(ProductId),

    /// Anything else
    NotFound,
}

impl Route {
    /// Resolve a location path.
    pub fn from_path(path: &str) -> Self {
        match path.trim_matches('/') {
            "" => Self::Home,
            "cart" => Self::Cart,
            segment => segment
                .parse::<ProductId>()
                .ok()
                .filter(|id| *id > 0)
                .map_or(Self::NotFound, Self::Product),
        }
    }

    /// Path that resolves back to this route.
    pub fn href(self) -> String {
        match self {
            Self::Home | Self::NotFound => "/".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::Product(id) => format!("/{id}"),
        }
    }
}

/// Route for the page currently loaded.
#[cfg(target_arch = "wasm32")]
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();

    Route::from_path(&path)
}

/// Route for the page currently loaded.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_route() -> Route {
    Route::from_path("/")
}

/// Load `route` in the browser.
#[cfg(target_arch = "wasm32")]
pub fn navigate(route: Route) {
    let result = web_sys::window()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("Window is unavailable"))
        .and_then(|window| window.location().set_href(&route.href()));

    if let Err(error) = result {
        tracing::warn!(?error, href = %route.href(), "navigation failed");
    }
}

/// Load `route` in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(route: Route) {
    tracing::debug!(href = %route.href(), "navigation requested outside a browser");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_home() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn cart_path_with_or_without_trailing_slash() {
        assert_eq!(Route::from_path("/cart"), Route::Cart);
        assert_eq!(Route::from_path("/cart/"), Route::Cart);
    }

    #[test]
    fn numeric_segment_is_product() {
        assert_eq!(Route::from_path("/16"), Route::Product(16));
    }

    #[test]
    fn other_paths_are_not_found() {
        assert_eq!(Route::from_path("/0"), Route::NotFound);
        assert_eq!(Route::from_path("/abc"), Route::NotFound);
        assert_eq!(Route::from_path("/cart/5"), Route::NotFound);
    }

    #[test]
    fn href_round_trips() {
        for route in [Route::Home, Route::Cart, Route::Product(7)] {
            assert_eq!(Route::from_path(&route.href()), route);
        }
    }
}
