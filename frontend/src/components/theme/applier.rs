/// Side of the session that touches the document.
///
/// Behind a trait so the session logic stays testable without a browser.
pub trait ThemeApplier {
    fn apply(&mut self, festival: Festival, mode: Mode);
}

/// [`ThemeApplier`] working against the real document.
///
/// One apply pass: marker attributes on the root element, the festival
/// stylesheet for the active mode, the festival script when there is one,
/// and the thoranam container on pages that carry it.
#[derive(Default)]
pub struct DomApplier;

impl ThemeApplier for DomApplier {
    fn apply(&mut self, festival: Festival, mode: Mode) {
        let document = gloo_utils::document();

        if let Some(root) = document.document_element() {
            let _ = root.set_attribute(festivals::THEME_ATTR, festival.as_str());
            let _ = root.set_attribute(festivals::MODE_ATTR, mode.as_str());
        }

        ensure_core_stylesheets(&document);
        swap_festival_stylesheet(&document, festival, mode);
        load_festival_script(&document, festival);
        place_thoranam(&document, festival);
    }
}

/// Shared stylesheets load once and never unload.
fn ensure_core_stylesheets(document: &Document) {
    for (name, href) in festivals::core_stylesheets() {
        let selector = format!("link[data-theme-name=\"{name}\"]");
        if matches!(document.query_selector(&selector), Ok(Some(_))) {
            continue;
        }
        append_stylesheet(document, name, href, true);
    }
}

/// Drop the previous festival stylesheet and attach the current one.
///
/// Core stylesheets are tagged separately and survive the swap.
fn swap_festival_stylesheet(document: &Document, festival: Festival, mode: Mode) {
    if let Ok(stale) = document.query_selector_all("link[data-festival-stylesheet]") {
        for i in 0..stale.length() {
            if let Some(node) = stale.item(i) {
                if let Some(element) = node.dyn_ref::<Element>() {
                    element.remove();
                }
            }
        }
    }

    if let Some(href) = festivals::stylesheet_href(festival, mode) {
        append_stylesheet(document, festival.as_str(), &href, false);
    }
}

fn append_stylesheet(document: &Document, name: &str, href: &str, core: bool) {
    let link: HtmlLinkElement = match document
        .create_element("link")
        .map(JsCast::unchecked_into)
    {
        Ok(link) => link,
        Err(e) => {
            console::log!(format!("stylesheet element creation failed: {e:?}"));
            return;
        }
    };

    link.set_rel("stylesheet");
    link.set_href(&versioned(href));
    let _ = link.set_attribute("data-theme-name", name);
    if !core {
        let _ = link.set_attribute("data-festival-stylesheet", "");
    }

    if let Some(head) = document.head() {
        let _ = head.append_child(&link);
    }
}

fn load_festival_script(document: &Document, festival: Festival) {
    if let Ok(stale) = document.query_selector_all("script[data-festival-script]") {
        for i in 0..stale.length() {
            if let Some(node) = stale.item(i) {
                if let Some(element) = node.dyn_ref::<Element>() {
                    element.remove();
                }
            }
        }
    }

    let Some(src) = festivals::script_src(festival) else {
        return;
    };

    let script: HtmlScriptElement = match document
        .create_element("script")
        .map(JsCast::unchecked_into)
    {
        Ok(script) => script,
        Err(e) => {
            console::log!(format!("script element creation failed: {e:?}"));
            return;
        }
    };

    script.set_src(&versioned(&src));
    script.set_async(true);
    let _ = script.set_attribute("data-festival-script", "");

    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
    }
}

/// Re-run the thoranam placement for the current location. Called from
/// every apply pass and again on route changes, since navigating can move
/// the page in or out of the allow-list while the festival stays put.
pub fn refresh_thoranam(festival: Festival) {
    place_thoranam(&gloo_utils::document(), festival);
}

/// The garland container sits as the first child of `<body>`, and only on
/// allow-listed pages with a non-default festival active.
fn place_thoranam(document: &Document, festival: Festival) {
    if let Ok(Some(existing)) =
        document.query_selector(&format!("#{}", festivals::THORANAM_CONTAINER_ID))
    {
        existing.remove();
    }

    let path = gloo_utils::window()
        .location()
        .pathname()
        .unwrap_or_default();
    if !festivals::thoranam_visible(festival, &path) {
        return;
    }

    let container = match document.create_element("div") {
        Ok(container) => container,
        Err(e) => {
            console::log!(format!("thoranam container creation failed: {e:?}"));
            return;
        }
    };
    container.set_id(festivals::THORANAM_CONTAINER_ID);
    container.set_class_name(&format!("thoranam thoranam-{}", festival.as_str()));

    let body = gloo_utils::body();
    let _ = body.insert_before(&container, body.first_child().as_ref());
}

/// Cache-busting query, theme assets redeploy under the same names.
fn versioned(href: &str) -> String {
    format!("{href}?v={}", js_sys::Date::now() as u64)
}

use super::festivals;
use gloo_console as console;
use interfacing::{Festival, Mode};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlLinkElement, HtmlScriptElement};
