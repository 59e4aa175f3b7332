pub mod dashboard;
pub mod not_found;

use dioxus::prelude::*;

use dashboard::UserDashboard;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    UserDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
