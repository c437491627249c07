//! Route Table
//!
//! Declarative path -> view mapping, handed to the webview router via the
//! `router_config` command. The table carries view identifiers only; the
//! frontend loads the matching view module on demand.

use serde::Serialize;

/// Path prefix the app is served under
pub const BASE_URL: &str = "/expirebee";

/// Identifiers for the five views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Inventory list (also the fallback for unmatched paths)
    List,
    /// Barcode scan
    Scan,
    /// Product management
    Products,
    /// Category/location/tag management
    Metadata,
    /// New-inventory entry form
    Entry,
}

/// One path -> view mapping
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: [Route; 5] = [
    Route { path: "/", view: View::List },
    Route { path: "/scan", view: View::Scan },
    Route { path: "/products", view: View::Products },
    Route { path: "/metadata", view: View::Metadata },
    Route { path: "/entry", view: View::Entry },
];

/// Unmatched paths land on the list view
pub const FALLBACK: View = View::List;

/// Resolve a path against the table
pub fn resolve(path: &str) -> View {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.view)
        .unwrap_or(FALLBACK)
}

/// The full table in one serializable payload
#[derive(Debug, Clone, Serialize)]
pub struct RouterConfig {
    pub base_url: &'static str,
    pub routes: &'static [Route],
    pub fallback: View,
}

pub fn router_config() -> RouterConfig {
    RouterConfig {
        base_url: BASE_URL,
        routes: &ROUTES,
        fallback: FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(resolve("/"), View::List);
        assert_eq!(resolve("/scan"), View::Scan);
        assert_eq!(resolve("/products"), View::Products);
        assert_eq!(resolve("/metadata"), View::Metadata);
        assert_eq!(resolve("/entry"), View::Entry);
    }

    #[test]
    fn test_unknown_path_falls_back_to_list() {
        assert_eq!(resolve("/nonexistent"), resolve("/"));
        assert_eq!(resolve(""), View::List);
    }

    #[test]
    fn test_config_payload() {
        let config = router_config();
        assert_eq!(config.base_url, "/expirebee");
        assert_eq!(config.routes.len(), 5);
        assert_eq!(config.fallback, View::List);
    }
}
