/// Path constants external code navigates with.
pub mod route_path {
    pub const LOGIN: &str = "/";
    pub const BILLS: &str = "#employee/bills";
    pub const NEW_BILL: &str = "#employee/bill/new";
    pub const DASHBOARD: &str = "#admin/dashboard";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    View(View),
    NotFound,
}

/// Registration-ordered route table; `resolve` takes the first match.
const ROUTE_TABLE: [(&str, View); 4] = [
    (route_path::LOGIN, View::Login),
    (route_path::BILLS, View::Bills),
    (route_path::NEW_BILL, View::NewBill),
    (route_path::DASHBOARD, View::Dashboard),
];

/// A pattern matches its exact path or any longer path at a `/` boundary.
fn matches(pattern: &str, path: &str) -> bool {
    path == pattern
        || path
            .strip_prefix(pattern)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Map the current path to a view. Unknown paths resolve to `NotFound`; the
/// dispatcher renders the default view for those instead of failing.
pub fn resolve(path: &str) -> Resolved {
    ROUTE_TABLE
        .iter()
        .find(|(pattern, _)| matches(pattern, path))
        .map(|(_, view)| Resolved::View(*view))
        .unwrap_or(Resolved::NotFound)
}

/// Icons of the vertical navigation rail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Window,
    Mail,
}

/// Which icon carries the `active-icon` marker for a given path. Recomputed
/// on every navigation; paths without an icon highlight nothing.
pub fn active_icon(path: &str) -> Option<NavIcon> {
    match resolve(path) {
        Resolved::View(View::Bills) => Some(NavIcon::Window),
        Resolved::View(View::NewBill) => Some(NavIcon::Mail),
        _ => None,
    }
}
