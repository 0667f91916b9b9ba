use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod logging;

fn main() {
    logging::init(log::Level::Info);
    yew::Renderer::<App>::new().render();
}
