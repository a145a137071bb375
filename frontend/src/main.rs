use crate::app::App;

mod app;
mod browser;
mod components;
mod config;
mod tool_grid;

fn main() {
    yew::Renderer::<App>::new().render();
}
