#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Metadata for one navigable target. Owned by the app layer; the guard
/// only ever reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern. Segments starting with `:` match any single segment.
    pub path: &'static str,
    /// Stable name usable as a redirect target.
    pub name: &'static str,
    /// Whether the route is restricted to authenticated users.
    pub requires_auth: bool,
}

impl RouteDescriptor {
    pub const fn new(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: false,
        }
    }

    pub const fn protected(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: true,
        }
    }
}

/// One navigation attempt, built fresh per transition and never stored.
#[derive(Clone, Copy, Debug)]
pub struct NavigationAttempt<'a> {
    pub target: &'a RouteDescriptor,
    /// Route being left, if the app has navigated before.
    pub current: Option<&'a RouteDescriptor>,
}

/// The app's route table. Resolves concrete paths to descriptors and
/// answers the effective auth requirement over a route's match chain.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    routes: &'static [RouteDescriptor],
}

impl RouteTable {
    pub const fn new(routes: &'static [RouteDescriptor]) -> Self {
        Self { routes }
    }

    /// Look a route up by its stable name.
    pub fn find(&self, name: &str) -> Option<&'static RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolve a concrete path against the table's patterns. Literal
    /// matches win over parameterized ones, so `/login` resolves to the
    /// login route even though `/:bucket` would also accept it.
    pub fn resolve(&self, path: &str) -> Option<&'static RouteDescriptor> {
        self.routes
            .iter()
            .filter(|route| pattern_matches(route.path, path))
            .min_by_key(|route| param_count(route.path))
    }

    /// Effective auth requirement: true if the route or any ancestor in
    /// its match chain requires authentication.
    pub fn requires_auth(&self, route: &RouteDescriptor) -> bool {
        route.requires_auth
            || self
                .routes
                .iter()
                .any(|other| other.requires_auth && is_ancestor(other.path, route.path))
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn param_count(pattern: &str) -> usize {
    segments(pattern)
        .filter(|segment| segment.starts_with(':'))
        .count()
}

/// Segment-wise pattern match; `:param` segments accept any one segment.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut expected = segments(pattern);
    let mut actual = segments(path);
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(want), Some(got)) => {
                if !want.starts_with(':') && want != got {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Proper segment-prefix ancestry. The root path has no segments and is
/// nobody's ancestor; `/admin` is an ancestor of `/admin/settings` but
/// not of `/administrators`.
fn is_ancestor(ancestor: &str, descendant: &str) -> bool {
    let prefix: Vec<&str> = segments(ancestor).collect();
    let full: Vec<&str> = segments(descendant).collect();
    !prefix.is_empty() && prefix.len() < full.len() && full.starts_with(&prefix)
}
