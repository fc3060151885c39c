mod app;
mod bills;
mod format;
mod model;
mod routes;
mod session;
mod store;
mod views;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
