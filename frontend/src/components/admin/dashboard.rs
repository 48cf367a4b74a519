use crate::components::imports::*;
use interfacing::{AdminCheck, EventForm};

use super::theme_picker::ThemePicker;

/// Admin area: identify yourself, then manage events and the active theme.
///
/// Identity is an email checked against the organizer allow-list on the
/// backend, every mutating request carries it.
pub struct Dashboard {
    email: Option<AttrValue>,
    denied: bool,
}

pub enum Msg {
    Identified(AttrValue),
    Denied,
    EventSaved,
    EventRejected(u16),
    Nothing,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: None,
            denied: false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let section_classes = css!(
            "
            width: 800px;
            max-width: 90vw;
            margin: 0 auto 30px auto;
        "
        );

        match &self.email {
            None => {
                let email_ref = NodeRef::default();

                let onsubmit = {
                    let email_ref = email_ref.clone();

                    ctx.link().callback_future(move |event: SubmitEvent| {
                        event.prevent_default();
                        let email = email_ref.cast::<HtmlInputElement>().unwrap().value();

                        async move {
                            match check_admin(&email).await {
                                Ok(check) if check.is_admin => Msg::Identified(email.into()),
                                Ok(_) => Msg::Denied,
                                Err(_) => Msg::Denied,
                            }
                        }
                    })
                };

                let denied = self
                    .denied
                    .then(|| html! { <p>{ "Not an organizer." }</p> })
                    .unwrap_or_default();

                html! {
                    <div class={section_classes}>
                        <h1>{ "Organizer sign-in" }</h1>
                        <form {onsubmit}>
                            <label>{ "Email" }
                                <input ref={email_ref} type="email" placeholder="Enter organizer email" name="email"/>
                            </label>
                            <button type="submit">{ "Continue" }</button>
                        </form>
                        {denied}
                    </div>
                }
            }
            Some(email) => {
                let event_form = self.event_form(ctx, email.clone());

                html! {
                    <div class={section_classes}>
                        <h1>{ "Dashboard" }</h1>
                        <p>{ format!("Signed in as {email}") }</p>

                        <h2>{ "Add event" }</h2>
                        {event_form}

                        <h2>{ "Theme" }</h2>
                        <ThemePicker email={email.clone()}/>
                    </div>
                }
            }
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::Identified(email) => {
                self.email = Some(email);
                self.denied = false;
                true
            }
            Self::Message::Denied => {
                self.denied = true;
                true
            }
            Self::Message::EventSaved => {
                console::log!("event saved");
                false
            }
            Self::Message::EventRejected(status) => {
                let message = match status {
                    409 => "An event with this name and date already exists",
                    _ => "Event rejected",
                };
                web_sys::window()
                    .unwrap()
                    .alert_with_message(message)
                    .unwrap();
                false
            }
            Self::Message::Nothing => false,
        }
    }
}

impl Dashboard {
    fn event_form(&self, ctx: &Context<Self>, email: AttrValue) -> Html {
        let name_ref = NodeRef::default();
        let category_ref = NodeRef::default();
        let date_ref = NodeRef::default();
        let time_ref = NodeRef::default();
        let location_ref = NodeRef::default();
        let description_ref = NodeRef::default();

        let onsubmit = {
            let refs = [
                name_ref.clone(),
                category_ref.clone(),
                date_ref.clone(),
                time_ref.clone(),
                location_ref.clone(),
                description_ref.clone(),
            ];

            ctx.link().callback_future(move |event: SubmitEvent| {
                event.prevent_default();
                let email = email.clone();

                let value =
                    |r: &NodeRef| r.cast::<HtmlInputElement>().unwrap().value();
                let [name, category, date, time, location, description] = &refs;
                let form = EventForm {
                    event_name: value(name),
                    category: value(category),
                    date: value(date),
                    time: value(time),
                    location: value(location),
                    description: value(description),
                    ..Default::default()
                };

                async move {
                    match create_event(&form, &email).await {
                        Ok(response) if response.status() == 201 => Msg::EventSaved,
                        Ok(response) => Msg::EventRejected(response.status()),
                        Err(_) => Msg::Nothing,
                    }
                }
            })
        };

        html! {
            <form {onsubmit}>
                <label>{ "Name" }
                    <input ref={name_ref} type="text" name="eventName" required=true/>
                </label>
                <label>{ "Category" }
                    <input ref={category_ref} type="text" name="events"/>
                </label>
                <label>{ "Date" }
                    <input ref={date_ref} type="date" name="date" required=true/>
                </label>
                <label>{ "Time" }
                    <input ref={time_ref} type="time" name="time"/>
                </label>
                <label>{ "Location" }
                    <input ref={location_ref} type="text" name="location"/>
                </label>
                <label>{ "Description" }
                    <input ref={description_ref} type="text" name="description"/>
                </label>
                <button type="submit">{ "Save event" }</button>
            </form>
        }
    }
}

async fn check_admin(email: &str) -> Result<AdminCheck, ()> {
    let url = format!(
        "{}?email={}",
        routes().api.admin.check.get().complete(),
        email
    );

    match Request::get(&url).send().await {
        Err(_) => Err(()),
        Ok(response) => response.json::<AdminCheck>().await.map_err(|_| ()),
    }
}

async fn create_event(form: &EventForm, email: &str) -> request::SendResult {
    Request::static_post(routes().api.events)
        .header("x-user-email", email)
        .json(&form)
        .unwrap()
        .send()
        .await
}
