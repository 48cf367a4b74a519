//! Theme lifecycle for one page view.
//!
//! The session starts from the cached record so the page paints the right
//! look immediately, then reconciles against whatever the realtime channel
//! delivers. All logic lives here against the [`ThemeStore`] and
//! [`ThemeApplier`] traits, the browser-facing halves plug in at the edge.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    /// Cached record applied, channel not confirmed yet.
    CacheApplied,
    /// Realtime deliveries are flowing.
    ChannelAttached,
}

pub struct ThemeSession {
    festival: Festival,
    mode: Mode,
    state: SessionState,
    loaded: bool,

    // latest-wins coalescing for changes arriving mid-apply
    applying: bool,
    pending: Option<(Festival, Mode, Source)>,

    store: Box<dyn ThemeStore>,
    applier: Box<dyn ThemeApplier>,
    bus: ThemeBus,
}

impl ThemeSession {
    pub fn new(store: Box<dyn ThemeStore>, applier: Box<dyn ThemeApplier>) -> Self {
        Self {
            festival: Festival::Default,
            mode: Mode::default(),
            state: SessionState::Uninitialized,
            loaded: false,
            applying: false,
            pending: None,
            store,
            applier,
            bus: ThemeBus::default(),
        }
    }

    /// Apply the cached record. No listener notification: nothing observed
    /// the page before this, there is no change to react to.
    pub fn init(&mut self) {
        let cached = self.store.load();
        let (festival, mode) = normalize(&cached);

        self.festival = festival;
        self.mode = mode;
        self.applier.apply(festival, mode);

        self.loaded = true;
        self.state = SessionState::CacheApplied;
    }

    /// A record arrived over the realtime channel.
    ///
    /// The delivery itself is what proves the channel works, so it promotes
    /// the session out of cache-only mode; a socket that opens but never
    /// delivers leaves the state at [`SessionState::CacheApplied`].
    ///
    /// Unknown festival identifiers normalize to the plain look rather than
    /// being dropped, so a stale client still converges with the rest of the
    /// fleet. Deliveries matching the active festival are no-ops.
    pub fn on_remote(&mut self, config: &ThemeConfig) {
        if self.state == SessionState::CacheApplied {
            self.state = SessionState::ChannelAttached;
        }

        let (festival, mode) = normalize(config);

        if festival == self.festival {
            return;
        }

        self.festival = festival;
        self.mode = mode;
        self.apply_and_notify(Source::Remote);

        self.store.save(&ThemeConfig {
            theme: festival.as_str().to_owned(),
            ..config.clone()
        });
    }

    /// Direct application of a festival on this client. Does not persist and
    /// does not publish, callers wanting either go through the backend.
    pub fn set_theme(&mut self, name: &str, mode: Mode) -> bool {
        let Ok(festival) = Festival::try_from(name) else {
            #[cfg(target_arch = "wasm32")]
            console::log!(format!("refusing unknown festival {name:?}"));
            return false;
        };

        self.festival = festival;
        self.mode = mode;
        self.apply_and_notify(Source::Local);
        true
    }

    fn apply_and_notify(&mut self, source: Source) {
        if self.applying {
            self.pending = Some((self.festival, self.mode, source));
            return;
        }

        self.applying = true;
        self.applier.apply(self.festival, self.mode);
        self.bus.emit(&ThemeChange {
            festival: self.festival,
            mode: self.mode,
            source,
        });
        self.applying = false;

        if let Some((festival, mode, source)) = self.pending.take() {
            self.festival = festival;
            self.mode = mode;
            self.apply_and_notify(source);
        }
    }

    pub fn subscribe(&mut self, listener: Callback<ThemeChange>) -> ListenerId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.bus.unsubscribe(id);
    }

    pub fn current_theme(&self) -> Festival {
        self.festival
    }

    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    pub fn is_theme_loaded(&self) -> bool {
        self.loaded
    }

    /// The decorated festival, `None` while the plain look is active.
    pub fn active_festival(&self) -> Option<Festival> {
        match self.festival {
            Festival::Default => None,
            festival => Some(festival),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn teardown(&mut self) {
        self.bus.clear();
        self.state = SessionState::Uninitialized;
    }
}

fn normalize(config: &ThemeConfig) -> (Festival, Mode) {
    let festival = match Festival::try_from(config.theme.as_str()) {
        Ok(festival) => festival,
        Err(()) => {
            #[cfg(target_arch = "wasm32")]
            console::log!(format!(
                "unknown festival {:?} in theme record, using default",
                config.theme
            ));
            Festival::Default
        }
    };
    (festival, config.mode)
}

use super::applier::ThemeApplier;
use super::bus::{ListenerId, Source, ThemeBus, ThemeChange};
use super::cache::ThemeStore;
use gloo_console as console;
use interfacing::{Festival, Mode, ThemeConfig};
use yew::Callback;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct MemoryStore {
        record: Rc<RefCell<Option<ThemeConfig>>>,
    }

    impl MemoryStore {
        fn seeded(config: ThemeConfig) -> Self {
            Self {
                record: Rc::new(RefCell::new(Some(config))),
            }
        }

        fn handle(&self) -> Rc<RefCell<Option<ThemeConfig>>> {
            self.record.clone()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> ThemeConfig {
            self.record.borrow().clone().unwrap_or_default()
        }

        fn save(&self, config: &ThemeConfig) {
            *self.record.borrow_mut() = Some(config.clone());
        }
    }

    #[derive(Default)]
    struct RecordingApplier {
        applied: Rc<RefCell<Vec<(Festival, Mode)>>>,
    }

    impl RecordingApplier {
        fn handle(&self) -> Rc<RefCell<Vec<(Festival, Mode)>>> {
            self.applied.clone()
        }
    }

    impl ThemeApplier for RecordingApplier {
        fn apply(&mut self, festival: Festival, mode: Mode) {
            self.applied.borrow_mut().push((festival, mode));
        }
    }

    fn session_with(
        store: MemoryStore,
    ) -> (ThemeSession, Rc<RefCell<Vec<(Festival, Mode)>>>) {
        let applier = RecordingApplier::default();
        let applied = applier.handle();
        (
            ThemeSession::new(Box::new(store), Box::new(applier)),
            applied,
        )
    }

    fn counting_listener(session: &mut ThemeSession) -> Rc<RefCell<Vec<ThemeChange>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let listener_seen = seen.clone();
        session.subscribe(Callback::from(move |change| {
            listener_seen.borrow_mut().push(change)
        }));
        seen
    }

    #[test]
    fn getters_are_safe_before_init() {
        let (session, _) = session_with(MemoryStore::default());

        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(!session.is_theme_loaded());
        assert_eq!(session.current_theme(), Festival::Default);
        assert_eq!(session.active_festival(), None);
    }

    #[test]
    fn init_with_empty_store_applies_the_default_silently() {
        let (mut session, applied) = session_with(MemoryStore::default());
        let seen = counting_listener(&mut session);

        session.init();

        assert_eq!(session.state(), SessionState::CacheApplied);
        assert!(session.is_theme_loaded());
        assert_eq!(*applied.borrow(), [(Festival::Default, Mode::Light)]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn cached_record_paints_before_any_delivery() {
        let (mut session, applied) =
            session_with(MemoryStore::seeded(ThemeConfig::new(
                Festival::Diwali,
                Mode::Dark,
            )));

        session.init();

        // channel never attaches, the cached look is the terminal state
        assert_eq!(session.state(), SessionState::CacheApplied);
        assert_eq!(session.active_festival(), Some(Festival::Diwali));
        assert_eq!(session.current_mode(), Mode::Dark);
        assert_eq!(*applied.borrow(), [(Festival::Diwali, Mode::Dark)]);
    }

    #[test]
    fn corrupt_cached_record_falls_back_to_the_default() {
        let (mut session, applied) = session_with(MemoryStore::seeded(ThemeConfig {
            theme: "halloween".into(),
            ..ThemeConfig::default()
        }));

        session.init();

        assert_eq!(session.current_theme(), Festival::Default);
        assert_eq!(*applied.borrow(), [(Festival::Default, Mode::Light)]);
    }

    #[test]
    fn remote_delivery_applies_persists_and_notifies_once() {
        let store = MemoryStore::seeded(ThemeConfig::new(Festival::Pongal, Mode::Light));
        let record = store.handle();
        let (mut session, applied) = session_with(store);
        session.init();
        let seen = counting_listener(&mut session);

        session.on_remote(&ThemeConfig {
            changed_by: Some("admin@example.com".into()),
            ..ThemeConfig::new(Festival::Christmas, Mode::Light)
        });

        assert_eq!(session.state(), SessionState::ChannelAttached);
        assert_eq!(session.active_festival(), Some(Festival::Christmas));
        assert_eq!(
            *applied.borrow(),
            [
                (Festival::Pongal, Mode::Light),
                (Festival::Christmas, Mode::Light)
            ]
        );

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].festival, Festival::Christmas);
        assert_eq!(seen[0].source, Source::Remote);

        let record = record.borrow();
        assert_eq!(record.as_ref().unwrap().theme, "christmas");
    }

    #[test]
    fn only_a_delivery_promotes_the_session_out_of_cache_only() {
        let (mut session, _) = session_with(MemoryStore::default());
        session.init();

        // opening a socket proves nothing, the state moves on the first frame
        assert_eq!(session.state(), SessionState::CacheApplied);

        session.on_remote(&ThemeConfig::new(Festival::Pongal, Mode::Light));
        assert_eq!(session.state(), SessionState::ChannelAttached);

        // even a no-op delivery counts as a working channel
        session.on_remote(&ThemeConfig::new(Festival::Pongal, Mode::Light));
        assert_eq!(session.state(), SessionState::ChannelAttached);
    }

    #[test]
    fn matching_delivery_is_a_no_op() {
        let (mut session, applied) =
            session_with(MemoryStore::seeded(ThemeConfig::new(
                Festival::Pongal,
                Mode::Light,
            )));
        session.init();
        let seen = counting_listener(&mut session);

        session.on_remote(&ThemeConfig::new(Festival::Pongal, Mode::Light));
        session.on_remote(&ThemeConfig::new(Festival::Pongal, Mode::Light));

        assert_eq!(applied.borrow().len(), 1); // init only
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unknown_remote_festival_normalizes_to_default_and_still_notifies() {
        let (mut session, applied) =
            session_with(MemoryStore::seeded(ThemeConfig::new(
                Festival::Pongal,
                Mode::Light,
            )));
        session.init();
        let seen = counting_listener(&mut session);

        session.on_remote(&ThemeConfig {
            theme: "halloween".into(),
            ..ThemeConfig::default()
        });

        assert_eq!(session.current_theme(), Festival::Default);
        assert_eq!(applied.borrow().last(), Some(&(Festival::Default, Mode::Light)));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn set_theme_rejects_unknown_names() {
        let (mut session, applied) = session_with(MemoryStore::default());
        session.init();

        assert!(!session.set_theme("halloween", Mode::Light));
        assert_eq!(session.current_theme(), Festival::Default);
        assert_eq!(applied.borrow().len(), 1); // init only
    }

    #[test]
    fn set_theme_applies_and_notifies_locally_without_persisting() {
        let store = MemoryStore::default();
        let record = store.handle();
        let (mut session, _) = session_with(store);
        session.init();
        let seen = counting_listener(&mut session);

        assert!(session.set_theme("diwali", Mode::Dark));

        assert_eq!(session.active_festival(), Some(Festival::Diwali));
        assert_eq!(session.current_mode(), Mode::Dark);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].source, Source::Local);
        assert!(record.borrow().is_none());
    }

    #[test]
    fn teardown_drops_listeners() {
        let (mut session, _) = session_with(MemoryStore::default());
        session.init();
        let seen = counting_listener(&mut session);

        session.teardown();
        session.set_theme("pongal", Mode::Light);

        assert!(seen.borrow().is_empty());
        assert_eq!(session.state(), SessionState::Uninitialized);
    }
}
