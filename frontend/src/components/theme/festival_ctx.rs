use crate::components::imports::*;

/// What subscribed components see of the theme state.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveFestival {
    pub festival: Festival,
    pub mode: Mode,
}

pub type FestivalCtx = Rc<ActiveFestival>;

pub struct FestivalCtxSub {
    ctx: FestivalCtx,
    _ctx_handle: ContextHandle<FestivalCtx>,
}

impl AsRef<ActiveFestival> for FestivalCtxSub {
    fn as_ref(&self) -> &ActiveFestival {
        &self.ctx
    }
}

impl FestivalCtxSub {
    fn new(ctx: FestivalCtx, _ctx_handle: ContextHandle<FestivalCtx>) -> Self {
        Self { ctx, _ctx_handle }
    }

    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(FestivalCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("Festival context does not exist");

        Self::new(ctx, _ctx_handle)
    }

    pub fn set(&mut self, ctx: FestivalCtx) {
        self.ctx = ctx;
    }
}

/// Theme provider: paints from the cache on creation, then follows the
/// realtime feed for the rest of the page view.
pub struct WithFestivalTheme {
    session: Rc<RefCell<ThemeSession>>,
    active: ActiveFestival,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    RemoteDelivery(ThemeConfig),
    Applied(ThemeChange),
    ChannelClosed,
}

impl Component for WithFestivalTheme {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut session = ThemeSession::new(Box::new(LocalThemeCache), Box::new(DomApplier::default()));
        session.init();
        session.subscribe(ctx.link().callback(Msg::Applied));

        let active = ActiveFestival {
            festival: session.current_theme(),
            mode: session.current_mode(),
        };

        let session = Rc::new(RefCell::new(session));
        attach_channel(ctx);

        Self { session, active }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::RemoteDelivery(config) => {
                // re-render, if any, comes through the Applied notification
                self.session.borrow_mut().on_remote(&config);
                false
            }
            Self::Message::Applied(change) => {
                self.active = ActiveFestival {
                    festival: change.festival,
                    mode: change.mode,
                };
                true
            }
            Self::Message::ChannelClosed => {
                console::log!("theme feed closed, staying on the cached record");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<FestivalCtx> context={ Rc::new(self.active.clone()) }>
                { ctx.props().children.clone() }
            </ContextProvider<FestivalCtx>>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.session.borrow_mut().teardown();
    }
}

fn attach_channel(ctx: &Context<WithFestivalTheme>) {
    let path = routes().api.theme.ws.get();
    let url = crate::ws::prepare_relative_url(path.complete());

    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            // cache-only page view, the look stays as painted
            console::log!(format!("theme feed unavailable: {e:?}"));
            return;
        }
    };

    // the session stays in cache-only mode until the first delivery proves
    // the feed actually works
    let (_write, read) = ws.split();
    ctx.link().send_stream(msg_stream(read));
}

fn msg_stream(r: futures::stream::SplitStream<WebSocket>) -> impl Stream<Item = Msg> {
    r.map(|i| match i {
        Ok(Message::Text(text)) => match serde_json::from_str::<ThemeConfig>(&text) {
            Ok(config) => Msg::RemoteDelivery(config),
            Err(e) => {
                console::log!(format!("malformed theme delivery: {e}"));
                Msg::ChannelClosed
            }
        },
        Ok(Message::Bytes(_)) => Msg::ChannelClosed,
        Err(_) => Msg::ChannelClosed,
    })
}

use super::applier::DomApplier;
use super::bus::ThemeChange;
use super::cache::LocalThemeCache;
use super::session::ThemeSession;
use futures::{Stream, StreamExt};
use gloo_net::websocket::{futures::WebSocket, Message};
use interfacing::{Festival, Mode, ThemeConfig};
use std::cell::RefCell;
