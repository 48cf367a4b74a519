use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::NotFound => html! { <><Header/><h1>{"not found 404"}</h1></> },
        Route::Home => html! {
            <>
                <Header/>
                <EventList title="Upcoming events"/>
            </>
        },
        Route::Events => html! {
            <>
                <Header/>
                <EventList/>
            </>
        },
        Route::Calendar => html! {
            <>
                <Header/>
                <EventList title="Calendar"/>
            </>
        },
        Route::AdminDashboard => html! {
            <>
                <Header/>
                <admin::Dashboard/>
            </>
        },
    }
}
