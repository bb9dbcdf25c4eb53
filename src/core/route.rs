//! In-app navigation

/// A resolved view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The dashboard at `/`
    Home,
    /// Any path without a view; carries the normalized path
    NotFound(String),
}

impl Route {
    pub const HOME_PATH: &'static str = "/";

    /// Resolve a path to a route
    pub fn parse(path: &str) -> Self {
        let path = normalize_path(path);
        if path == Self::HOME_PATH {
            Route::Home
        } else {
            Route::NotFound(path)
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => Self::HOME_PATH,
            Route::NotFound(path) => path,
        }
    }
}

/// Strip query and fragment, collapse trailing slashes, force a leading slash
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Route::HOME_PATH.to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Current location plus navigation history
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(initial_path: &str) -> Self {
        let current = Route::parse(initial_path);
        if let Route::NotFound(ref path) = current {
            tracing::warn!("No view for start path {}", path);
        }
        Self {
            current,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to a path. Returns the new route.
    pub fn navigate(&mut self, path: &str) -> &Route {
        let next = Route::parse(path);
        if next != self.current {
            tracing::info!("Navigating {} -> {}", self.current.path(), next.path());
            let previous = std::mem::replace(&mut self.current, next);
            self.history.push(previous);
        }
        &self.current
    }

    /// Go back one entry. Returns false when there is no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.current = route;
                true
            }
            None => false,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::HOME_PATH)
    }
}
