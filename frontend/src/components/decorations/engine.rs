//! Timer-driven particle runtime.
//!
//! One engine runs per active festival. Spawning happens on fixed ticks,
//! admission goes through the per-kind [`Pool`]s, and every spawned element
//! schedules its own removal. Teardown is explicit through [`DecorationEngine::stop`],
//! with a theme-marker check on every tick as the safety net against loops
//! outliving a theme switch.

const CONTAINER_ID: &str = "decorations-container";

const FALLING_TICK_MS: u32 = 800;
const ROCKET_TICK_MS: u32 = 1600;

fn falling_pool() -> Pool {
    Pool::new(PoolConfig {
        capacity: 15,
        min_spawn_gap_ms: 800.0,
        removal_delay_ms: 12_000,
    })
}

fn rocket_pool() -> Pool {
    Pool::new(PoolConfig {
        capacity: 8,
        min_spawn_gap_ms: 0.0,
        removal_delay_ms: 3_000,
    })
}

pub struct DecorationEngine {
    cancelled: Rc<Cell<bool>>,
    falling: Rc<RefCell<Pool>>,
    rockets: Rc<RefCell<Pool>>,
    _intervals: Vec<Interval>,
}

impl DecorationEngine {
    /// Start the loops for `festival`, `None` when it has no decorations.
    pub fn start(festival: Festival) -> Option<Self> {
        if !catalog::has_decorations(festival) {
            return None;
        }

        let cancelled = Rc::new(Cell::new(false));
        let falling = Rc::new(RefCell::new(falling_pool()));
        let rockets = Rc::new(RefCell::new(rocket_pool()));

        let mut intervals = Vec::new();

        if !catalog::falling_glyphs(festival).is_empty() {
            intervals.push(spawn_loop(
                festival,
                FALLING_TICK_MS,
                "falling-particle",
                catalog::falling_glyphs(festival),
                cancelled.clone(),
                falling.clone(),
            ));
        }

        if !catalog::rocket_glyphs(festival).is_empty() {
            intervals.push(spawn_loop(
                festival,
                ROCKET_TICK_MS,
                "rocket-particle",
                catalog::rocket_glyphs(festival),
                cancelled.clone(),
                rockets.clone(),
            ));
        }

        Some(Self {
            cancelled,
            falling,
            rockets,
            _intervals: intervals,
        })
    }

    /// Kill the loops, clear the container, zero the pools. Idempotent.
    pub fn stop(&mut self) {
        self.cancelled.set(true);
        self._intervals.clear();
        self.falling.borrow_mut().reset();
        self.rockets.borrow_mut().reset();

        if let Ok(Some(container)) =
            gloo_utils::document().query_selector(&format!("#{CONTAINER_ID}"))
        {
            container.set_inner_html("");
        }
    }
}

impl Drop for DecorationEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_loop(
    festival: Festival,
    tick_ms: u32,
    class: &'static str,
    glyphs: &'static [catalog::Glyph],
    cancelled: Rc<Cell<bool>>,
    pool: Rc<RefCell<Pool>>,
) -> Interval {
    Interval::new(tick_ms, move || {
        if cancelled.get() {
            return;
        }

        // theme switched under us without a stop(), terminate for good
        if !marker_matches(festival) {
            cancelled.set(true);
            return;
        }

        if !pool.borrow_mut().try_admit(js_sys::Date::now()) {
            return;
        }

        match catalog::pick(glyphs, js_sys::Math::random()) {
            Some(glyph) => spawn_particle(glyph, class, &pool),
            None => pool.borrow_mut().release(),
        }
    })
}

fn marker_matches(festival: Festival) -> bool {
    gloo_utils::document()
        .document_element()
        .and_then(|root| root.get_attribute(festivals::THEME_ATTR))
        .is_some_and(|active| active == festival.as_str())
}

fn spawn_particle(glyph: &catalog::Glyph, class: &str, pool: &Rc<RefCell<Pool>>) {
    let document = gloo_utils::document();

    let element: HtmlElement = match document.create_element("span").map(JsCast::unchecked_into) {
        Ok(element) => element,
        Err(e) => {
            console::log!(format!("particle creation failed: {e:?}"));
            pool.borrow_mut().release();
            return;
        }
    };

    element.set_class_name(class);
    element.set_text_content(Some(glyph.glyph));

    let style = element.style();
    let _ = style.set_property("left", &format!("{:.1}%", js_sys::Math::random() * 100.0));
    let _ = style.set_property(
        "animation-duration",
        &format!("{:.1}s", 6.0 + js_sys::Math::random() * 6.0),
    );
    let _ = style.set_property(
        "font-size",
        &format!("{:.0}px", 14.0 + js_sys::Math::random() * 14.0),
    );

    let _ = ensure_container(&document).and_then(|container| container.append_child(&element).ok());

    let removal_delay = pool.borrow().config().removal_delay_ms;
    let pool = pool.clone();
    Timeout::new(removal_delay, move || {
        element.remove();
        pool.borrow_mut().release();
    })
    .forget();
}

fn ensure_container(document: &web_sys::Document) -> Option<Element> {
    if let Ok(Some(container)) = document.query_selector(&format!("#{CONTAINER_ID}")) {
        return Some(container);
    }

    let container = document.create_element("div").ok()?;
    container.set_id(CONTAINER_ID);
    container.set_class_name("decorations-layer");
    gloo_utils::body().append_child(&container).ok()?;
    Some(container)
}

use super::catalog;
use super::pool::{Pool, PoolConfig};
use crate::components::theme::festivals;
use gloo_console as console;
use gloo_timers::callback::{Interval, Timeout};
use interfacing::Festival;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
