mod app;
mod components;
mod router;
mod switch;
mod ws;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
