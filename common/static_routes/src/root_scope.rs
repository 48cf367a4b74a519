#[allow(unused_imports)]
use crate::primitives::{Get, Post, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub home: Home,
    pub events: Events,
    pub calendar: Calendar,
    pub admin: Admin,
}

#[derive(Default)]
pub struct Admin {
    pub dashboard: AdminDashboard,
}

#[derive(Default, Get)]
pub struct Home;

impl Url for Home {
    fn postfix(&self) -> &str {
        "/"
    }
}

#[derive(Default, Get)]
pub struct Events;

impl Url for Events {
    fn postfix(&self) -> &str {
        "/events"
    }
}

#[derive(Default, Get)]
pub struct Calendar;

impl Url for Calendar {
    fn postfix(&self) -> &str {
        "/calendar"
    }
}

#[derive(Default, Get)]
pub struct AdminDashboard;

impl Url for AdminDashboard {
    fn postfix(&self) -> &str {
        "/admin/dashboard"
    }
}
