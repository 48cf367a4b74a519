//! Fan-out point for accepted theme changes.
//!
//! Subscribers get every publish after they attach; the replay of the
//! current record on attach is the websocket route's job, which reads it
//! from the sheet store before draining the receiver.

use interfacing::ThemeConfig;

pub struct ThemeHub {
    tx: async_broadcast::Sender<ThemeConfig>,
    rx: async_broadcast::InactiveReceiver<ThemeConfig>,
}

impl Default for ThemeHub {
    fn default() -> Self {
        let (mut tx, rx) = async_broadcast::broadcast(16);
        // a slow subscriber only ever needs the latest value
        tx.set_overflow(true);
        // publishing must return even with zero connected subscribers,
        // the record is already persisted and new subscribers replay it
        tx.set_await_active(false);
        Self {
            tx,
            rx: rx.deactivate(),
        }
    }
}

impl ThemeHub {
    pub fn subscribe(&self) -> async_broadcast::Receiver<ThemeConfig> {
        self.rx.activate_cloned()
    }

    pub async fn publish(&self, config: ThemeConfig) {
        if let Err(e) = self.tx.broadcast(config).await {
            // nobody attached right now, deliveries resume with the next subscriber
            tracing::debug!("Theme broadcast skipped: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interfacing::{Festival, Mode};

    #[tokio::test]
    async fn subscribers_receive_publishes_in_order() {
        let hub = ThemeHub::default();
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        hub.publish(ThemeConfig::new(Festival::Pongal, Mode::Light))
            .await;
        hub.publish(ThemeConfig::new(Festival::Christmas, Mode::Light))
            .await;

        for rx in [&mut first, &mut second] {
            assert_eq!(rx.recv().await.unwrap().theme, "pongal");
            assert_eq!(rx.recv().await.unwrap().theme, "christmas");
        }
    }

    #[tokio::test]
    async fn publish_returns_promptly_with_no_subscribers() {
        let hub = ThemeHub::default();

        let publish = hub.publish(ThemeConfig::new(Festival::Pongal, Mode::Light));
        tokio::time::timeout(std::time::Duration::from_secs(2), publish)
            .await
            .expect("publish must not wait for subscribers");
    }

    #[tokio::test]
    async fn late_subscriber_sees_only_later_publishes() {
        let hub = ThemeHub::default();

        hub.publish(ThemeConfig::new(Festival::Diwali, Mode::Dark))
            .await;

        let mut late = hub.subscribe();
        hub.publish(ThemeConfig::new(Festival::NewYear, Mode::Light))
            .await;

        assert_eq!(late.recv().await.unwrap().theme, "newyear");
    }
}
