#[allow(unused_imports)]
use crate::primitives::{Delete, Get, Post, Put, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub health_check: HealthCheck,
    pub events: Events,
    pub admin: Admin,
    pub theme: Theme,
}

#[derive(Default, Get)]
pub struct HealthCheck;

impl Url for HealthCheck {
    fn postfix(&self) -> &str {
        "/health_check"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

// event listing and creation; per-id routes take path params,
// routers spell those out as literals
#[derive(Default, Get, Post)]
pub struct Events;

impl Url for Events {
    fn postfix(&self) -> &str {
        "/events"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default)]
pub struct Admin {
    pub check: AdminCheck,
}

#[derive(Default, Get)]
pub struct AdminCheck;

impl Url for AdminCheck {
    fn postfix(&self) -> &str {
        "/admin/check"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default)]
pub struct Theme {
    pub current: ThemeRecord,
    pub ws: ThemeWs,
}

#[derive(Default, Get, Post)]
pub struct ThemeRecord;

impl Url for ThemeRecord {
    fn postfix(&self) -> &str {
        "/theme"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default, Get)]
pub struct ThemeWs;

impl Url for ThemeWs {
    fn postfix(&self) -> &str {
        "/ws/theme"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}
