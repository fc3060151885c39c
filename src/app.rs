use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::bills::BillsPage;
use crate::routes::{self, route_path, Resolved, View};
use crate::session;
use crate::store::ApiStore;
use crate::views;

fn current_path() -> String {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    if hash.is_empty() {
        route_path::LOGIN.to_string()
    } else {
        hash
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let path = use_state(current_path);

    // Single entry point for programmatic view changes. Hash fragments are
    // mirrored into the address bar so reload and history keep working.
    let on_navigate = {
        let path = path.clone();
        Callback::from(move |target: String| {
            if target.starts_with('#') {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_hash(&target);
                }
            }
            path.set(target);
        })
    };

    {
        let path = path.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn Fn()>::new(move || path.set(current_path()));
                if let Some(window) = web_sys::window() {
                    window.set_onhashchange(Some(listener.as_ref().unchecked_ref()));
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        window.set_onhashchange(None);
                    }
                    drop(listener);
                }
            },
            (),
        );
    }

    // Identity is read again on every navigation; protected views fall back
    // to the login view when nothing is stored.
    let session = session::load();
    let store = ApiStore::new();

    match routes::resolve(&path) {
        Resolved::View(View::Bills) if session.is_some() => views::vertical_layout(
            routes::active_icon(&path),
            html! { <BillsPage on_navigate={on_navigate} store={Some(store)} /> },
        ),
        Resolved::View(View::NewBill) if session.is_some() => {
            views::vertical_layout(routes::active_icon(&path), views::new_bill_view())
        }
        Resolved::View(View::Dashboard) if session.is_some() => views::dashboard_view(),
        _ => views::login_view(),
    }
}
