use crate::components::imports::*;

use super::applier;
use super::festival_ctx::{FestivalCtx, FestivalCtxSub};

/// Renderless guard keeping the thoranam container honest across
/// navigation: routing in this app never re-runs a theme apply, so page
/// changes re-evaluate the placement here. Must sit inside the router.
pub struct ThoranamGate {
    ctx_sub: FestivalCtxSub,
    _location_handle: Option<LocationHandle>,
}

pub enum Msg {
    FestivalCtxUpdate(FestivalCtx),
    LocationChanged,
}

impl Component for ThoranamGate {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let ctx_sub = FestivalCtxSub::subscribe(ctx, Msg::FestivalCtxUpdate);

        let location_handle = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::LocationChanged));

        Self {
            ctx_sub,
            _location_handle: location_handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::FestivalCtxUpdate(festival_ctx) => {
                self.ctx_sub.set(festival_ctx);
            }
            Self::Message::LocationChanged => {}
        }

        applier::refresh_thoranam(self.ctx_sub.as_ref().festival);
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {}
    }
}
