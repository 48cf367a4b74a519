use yew_router::prelude::*;

// Router accepts only literals, so static_routes are used in tests
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/events")]
    Events,
    #[at("/calendar")]
    Calendar,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}
