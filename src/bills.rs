use std::rc::Rc;

use gloo_console::{error, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::format;
use crate::model::DisplayBill;
use crate::routes::route_path;
use crate::store::{ApiStore, BillsGateway, FetchError};
use crate::views::{bills_view, BillsViewState};

/// Orchestrates the bills view: fetch -> format -> sort, plus the user
/// interaction handlers. Collaborators are injected so the controller can be
/// driven without a rendering surface.
#[derive(Clone)]
pub struct BillsController {
    store: Option<Rc<dyn BillsGateway>>,
    on_navigate: Callback<String>,
    on_preview: Callback<String>,
}

impl BillsController {
    pub fn new(
        store: Option<Rc<dyn BillsGateway>>,
        on_navigate: Callback<String>,
        on_preview: Callback<String>,
    ) -> Self {
        Self {
            store,
            on_navigate,
            on_preview,
        }
    }

    /// Fetch the bill collection and return it display-ready, latest first.
    /// Without a configured store this resolves to the empty list, not an
    /// error. A record whose date fails validation is tagged and kept; the
    /// stable descending sort falls back to lexical order for that record.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, FetchError> {
        let store = match &self.store {
            Some(store) => store,
            None => return Ok(Vec::new()),
        };
        let raw = store.list().await?;
        let mut bills: Vec<DisplayBill> = raw.iter().map(format::format_bill).collect();
        bills.sort_by(|a, b| b.raw_date.cmp(&a.raw_date));
        Ok(bills)
    }

    /// Show the receipt behind a row's eye icon. No network call.
    pub fn handle_click_icon_eye(&self, file_url: &str) {
        self.on_preview.emit(file_url.to_string());
    }

    /// Jump to the bill-creation view.
    pub fn handle_click_new_bill(&self) {
        self.on_navigate.emit(route_path::NEW_BILL.to_string());
    }
}

#[derive(Properties, PartialEq)]
pub struct BillsPageProps {
    pub on_navigate: Callback<String>,
    #[prop_or_default]
    pub store: Option<ApiStore>,
}

#[function_component(BillsPage)]
pub fn bills_page(props: &BillsPageProps) -> Html {
    let bills = use_state(|| None::<Result<Vec<DisplayBill>, FetchError>>);
    let preview = use_state(|| None::<String>);

    let controller = {
        let preview = preview.clone();
        BillsController::new(
            props
                .store
                .clone()
                .map(|store| Rc::new(store) as Rc<dyn BillsGateway>),
            props.on_navigate.clone(),
            Callback::from(move |url: String| preview.set(Some(url))),
        )
    };

    {
        let bills = bills.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let result = controller.get_bills().await;
                    match &result {
                        Ok(list) => {
                            for bill in list.iter().filter(|bill| bill.date_malformed) {
                                warn!(format!(
                                    "bill {}: unparseable date {:?}, listed as-is",
                                    bill.id, bill.raw_date
                                ));
                            }
                        }
                        Err(err) => error!(format!("failed to fetch bills: {err}")),
                    }
                    bills.set(Some(result));
                });
                || ()
            },
            (),
        );
    }

    let state = match &*bills {
        None => BillsViewState::Loading,
        Some(Err(err)) => BillsViewState::Error(err.to_string()),
        Some(Ok(list)) => BillsViewState::Loaded(list.clone()),
    };

    let on_new_bill = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.handle_click_new_bill())
    };
    let on_eye = {
        let controller = controller.clone();
        Callback::from(move |url: String| controller.handle_click_icon_eye(&url))
    };
    let on_close_preview = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| preview.set(None))
    };

    bills_view(&state, on_new_bill, on_eye, on_close_preview, preview.as_deref())
}
