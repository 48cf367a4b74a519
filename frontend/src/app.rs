use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    use crate::components::{Decorations, ThoranamGate, WithFestivalTheme};

    html! {
        <WithFestivalTheme>
            <Decorations/>
            <BrowserRouter>
                <ThoranamGate/>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </WithFestivalTheme>
    }
}
