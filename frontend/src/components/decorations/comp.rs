use crate::components::imports::*;

/// Renders nothing itself, runs the particle engine for whatever festival
/// the theme context reports.
pub struct Decorations {
    ctx_sub: FestivalCtxSub,
    engine: Option<DecorationEngine>,
}

pub enum Msg {
    FestivalCtxUpdate(FestivalCtx),
}

impl Component for Decorations {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let ctx_sub = FestivalCtxSub::subscribe(ctx, Msg::FestivalCtxUpdate);
        let engine = DecorationEngine::start(ctx_sub.as_ref().festival);
        Self { ctx_sub, engine }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::FestivalCtxUpdate(festival_ctx) => {
                let festival = festival_ctx.festival;
                self.ctx_sub.set(festival_ctx);

                if let Some(engine) = &mut self.engine {
                    engine.stop();
                }
                self.engine = DecorationEngine::start(festival);
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {}
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(engine) = &mut self.engine {
            engine.stop();
        }
    }
}

use super::engine::DecorationEngine;
use crate::components::theme::{FestivalCtx, FestivalCtxSub};
