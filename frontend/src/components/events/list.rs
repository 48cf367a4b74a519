use crate::components::imports::*;
use crate::components::theme::{FestivalCtx, FestivalCtxSub};

pub struct EventList {
    events: Option<Vec<interfacing::Event>>,
    festival_ctx: FestivalCtxSub,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    #[prop_or(AttrValue::from("Events"))]
    pub title: AttrValue,
}

pub enum Msg {
    EventsLoaded(Vec<interfacing::Event>),
    FestivalCtxUpdate(FestivalCtx),
    Nothing,
}

impl Component for EventList {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            events: None,
            festival_ctx: FestivalCtxSub::subscribe(ctx, Self::Message::FestivalCtxUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let wrapper_classes = css!(
            "
            display: flex;
            flex-direction: column;
            align-items: center;
        "
        );

        let event_classes = css!(
            "
            border: 2px solid var(--festival-border, #21252980);
            width: 800px;
            max-width: 90vw;
            margin-bottom: 20px;
            padding: 15px 30px;
            border-radius: 5px;
            "
        );

        let title_classes = css!("text-align: center; margin-bottom: 30px;");

        let events = match &self.events {
            None => html! { <p>{ "Loading events..." }</p> },
            Some(events) if events.is_empty() => html! { <p>{ "No events yet." }</p> },
            Some(events) => events
                .iter()
                .map(|event| {
                    let when = match event.time.as_str() {
                        "" => event.date.clone(),
                        time => format!("{} {}", event.date, time),
                    };

                    html! {
                        <div key={event.id.clone()} class={event_classes.clone()}>
                            <h2>{ &event.event_name }</h2>
                            <p>{ when }</p>

                            if !event.location.is_empty() {
                                <p>{ &event.location }</p>
                            }
                            if !event.description.is_empty() {
                                <p>{ &event.description }</p>
                            }
                        </div>
                    }
                })
                .collect::<Html>(),
        };

        html! {
            <>
                <h1 class={title_classes}>{ ctx.props().title.clone() }</h1>

                <div class={wrapper_classes}>
                    {events}
                </div>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_future(async {
                match fetch_event_list().await {
                    Ok(events) => Self::Message::EventsLoaded(events),
                    Err(_) => Self::Message::Nothing,
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::EventsLoaded(events) => {
                self.events = Some(events);
                true
            }
            Self::Message::FestivalCtxUpdate(festival_ctx) => {
                self.festival_ctx.set(festival_ctx);
                true
            }
            Self::Message::Nothing => false,
        }
    }
}

async fn fetch_event_list() -> Result<Vec<interfacing::Event>, ()> {
    let result = Request::static_get(routes().api.events).send().await;

    match result {
        Err(_) => Err(()),
        Ok(response) => match response.status() {
            200 => {
                let body = response
                    .json::<interfacing::EventsResponse>()
                    .await
                    .map_err(|_| ())?;
                Ok(body.events)
            }
            _ => Err(()),
        },
    }
}
