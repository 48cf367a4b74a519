#![allow(non_upper_case_globals)]

use crate::components::imports::*;
use crate::components::theme::{FestivalCtx, FestivalCtxSub};

use interfacing::Festival;

pub struct Header {
    festival_ctx: FestivalCtxSub,
}

pub enum Msg {
    FestivalCtxUpdate(FestivalCtx),
}

impl Component for Header {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            festival_ctx: FestivalCtxSub::subscribe(ctx, Self::Message::FestivalCtxUpdate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::FestivalCtxUpdate(festival_ctx) => {
                self.festival_ctx.set(festival_ctx);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let wrapper_style = css!(
            "
                display: flex;
                align-items: center;
                justify-content: space-between;
                height: 4.5em;
                width: 100vw;
                padding: 0 2em;
                box-sizing: border-box;
                border-bottom: 2px solid var(--festival-border, #21252980);
            "
        );

        let nav_style = css!(
            "
                display: flex;
                gap: 2em;
                font-size: 110%;
            "
        );

        let festival = match self.festival_ctx.as_ref().festival {
            Festival::Default => html! {},
            festival => html! { <div>{ festival.as_str() }</div> },
        };

        html! {
            <div class={ wrapper_style }>
                <nav class={ nav_style }>
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::Events}>{ "Events" }</Link<Route>>
                    <Link<Route> to={Route::Calendar}>{ "Calendar" }</Link<Route>>
                    <Link<Route> to={Route::AdminDashboard}>{ "Admin" }</Link<Route>>
                </nav>

                {festival}
            </div>
        }
    }
}
