//! Static presentation tables for the supported festivals.
//!
//! The tables only describe which assets belong to which festival;
//! loading them into the document is [`super::applier`]'s job.

pub const THEME_ATTR: &str = "data-active-theme";
pub const MODE_ATTR: &str = "data-theme-mode";

pub const THORANAM_CONTAINER_ID: &str = "thoranam-container";

/// Pages that carry the thoranam garland. Everything else stays bare.
pub const THORANAM_PAGES: &[&str] = &["calendar", "admin", "events"];

/// Stylesheets every festival shares, loaded once per document.
pub fn core_stylesheets() -> &'static [(&'static str, &'static str)] {
    &[
        ("core-particles", "/themes/core/particles.css"),
        ("core-thoranam", "/themes/core/thoranam.css"),
    ]
}

/// The festival stylesheet for a given mode, `None` for the plain look.
pub fn stylesheet_href(festival: Festival, mode: Mode) -> Option<String> {
    match festival {
        Festival::Default => None,
        festival if festival.dual_mode() => Some(format!(
            "/themes/{id}/{id}-{mode}.css",
            id = festival.as_str(),
            mode = mode.as_str()
        )),
        festival => Some(format!("/themes/{id}/{id}.css", id = festival.as_str())),
    }
}

/// Festival-specific behavior script, only diwali ships one.
pub fn script_src(festival: Festival) -> Option<String> {
    festival
        .has_script()
        .then(|| format!("/themes/{id}/{id}.js", id = festival.as_str()))
}

pub fn has_thoranam(festival: Festival) -> bool {
    !matches!(festival, Festival::Default)
}

/// Whether the current location may host the thoranam container.
///
/// The first path segment decides, so `/admin/dashboard` counts as `admin`.
pub fn thoranam_allowed(path: &str) -> bool {
    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    THORANAM_PAGES.contains(&first_segment)
}

/// The container placement decision: festival and page both have to agree.
/// Re-evaluated on every theme apply and on every route change.
pub fn thoranam_visible(festival: Festival, path: &str) -> bool {
    has_thoranam(festival) && thoranam_allowed(path)
}

use interfacing::{Festival, Mode};
