use crate::components::imports::*;
use interfacing::{Festival, Mode, ThemeChangeForm, SUPPORTED_FESTIVALS};

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    /// Acting admin, goes out as the caller identity header.
    pub email: AttrValue,
}

/// Festival selector. A successful save comes back to every client,
/// this one included, over the realtime feed.
#[styled_component]
pub fn ThemePicker(props: &Props) -> Html {
    let festival_ref = use_node_ref();
    let mode_ref = use_node_ref();

    let onsubmit = {
        let email = props.email.clone();
        let festival_ref = festival_ref.clone();
        let mode_ref = mode_ref.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let window = web_sys::window().unwrap();
            let email = email.clone();

            let theme = festival_ref.cast::<HtmlSelectElement>().unwrap().value();
            let mode = match mode_ref.cast::<HtmlSelectElement>().unwrap().value().as_str() {
                "dark" => Mode::Dark,
                _ => Mode::Light,
            };

            let form = ThemeChangeForm {
                theme,
                mode,
                changed_by: None,
            };

            wasm_bindgen_futures::spawn_local(async move {
                let response = request_theme_change(&form, &email).await;

                match response {
                    Ok(response) if response.status() == 200 => {
                        console::log!("theme change saved");
                    }
                    Ok(response) if response.status() == 401 => {
                        window.alert_with_message("Unauthorized").unwrap();
                    }
                    Ok(response) => {
                        response.log_status();
                        window.alert_with_message("Theme change rejected").unwrap();
                    }
                    Err(e) => {
                        console::log!(format!("theme change failed: {e}"));
                    }
                };
            })
        })
    };

    let options = SUPPORTED_FESTIVALS
        .iter()
        .map(|festival| {
            html! {
                <option value={festival.as_str()} selected={*festival == Festival::Default}>
                    { festival.as_str() }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <form {onsubmit}>
            <label>{ "Festival" }
                <select ref={festival_ref} name="festival">
                    {options}
                </select>
            </label>
            <label>{ "Mode" }
                <select ref={mode_ref} name="mode">
                    <option value="light" selected=true>{ "light" }</option>
                    <option value="dark">{ "dark" }</option>
                </select>
            </label>
            <button type="submit">{ "Apply theme" }</button>
        </form>
    }
}

async fn request_theme_change(form: &ThemeChangeForm, email: &str) -> request::SendResult {
    Request::static_post(routes().api.theme.current)
        .header("x-user-email", email)
        .json(&form)
        .unwrap()
        .send()
        .await
}
