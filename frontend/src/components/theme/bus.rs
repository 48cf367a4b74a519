/// Where a theme change came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Applied on this client, by the admin dashboard.
    Local,
    /// Delivered over the realtime channel.
    Remote,
}

/// Payload delivered to theme change listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeChange {
    pub festival: Festival,
    pub mode: Mode,
    pub source: Source,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(usize);

/// In-page notification fan-out for applied theme changes.
///
/// Listeners run synchronously, in subscription order, on the same tick the
/// change is applied.
#[derive(Default)]
pub struct ThemeBus {
    listeners: Vec<(ListenerId, Callback<ThemeChange>)>,
    next_id: usize,
}

impl ThemeBus {
    pub fn subscribe(&mut self, listener: Callback<ThemeChange>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn emit(&self, change: &ThemeChange) {
        for (_, listener) in &self.listeners {
            listener.emit(change.clone());
        }
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

use interfacing::{Festival, Mode};
use yew::Callback;
