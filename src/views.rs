use yew::prelude::*;

use crate::model::DisplayBill;
use crate::routes::NavIcon;

/// Exactly one of the three drives the bills markup, so the list, the
/// loading indicator and the error message can never show together.
pub enum BillsViewState {
    Loading,
    Error(String),
    Loaded(Vec<DisplayBill>),
}

pub fn bills_view(
    state: &BillsViewState,
    on_new_bill: Callback<MouseEvent>,
    on_eye: Callback<String>,
    on_close_preview: Callback<MouseEvent>,
    preview: Option<&str>,
) -> Html {
    match state {
        BillsViewState::Loading => loading_view(),
        BillsViewState::Error(message) => error_view(message),
        BillsViewState::Loaded(bills) => html! {
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Mes notes de frais"}</div>
                    <button
                        type="button"
                        data-testid="btn-new-bill"
                        class="btn btn-primary"
                        onclick={on_new_bill}
                    >
                        {"Nouvelle note de frais"}
                    </button>
                </div>
                <div id="data-table">
                    <table class="table table-striped" style="width: 100%">
                        <thead>
                            <tr>
                                <th>{"Type"}</th>
                                <th>{"Nom"}</th>
                                <th>{"Date"}</th>
                                <th>{"Montant"}</th>
                                <th>{"Statut"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody data-testid="tbody">
                            { for bills.iter().map(|bill| bill_row(bill, on_eye.clone())) }
                        </tbody>
                    </table>
                </div>
                { receipt_modal(preview, on_close_preview) }
            </div>
        },
    }
}

pub fn loading_view() -> Html {
    html! { <div id="loading">{"Loading..."}</div> }
}

pub fn error_view(message: &str) -> Html {
    html! {
        <div class="error-page">
            <div data-testid="error-message" class="error-message">{ message.to_string() }</div>
        </div>
    }
}

fn bill_row(bill: &DisplayBill, on_eye: Callback<String>) -> Html {
    let file_url = bill.file_url.clone().unwrap_or_default();
    let onclick = {
        let file_url = file_url.clone();
        Callback::from(move |_: MouseEvent| on_eye.emit(file_url.clone()))
    };
    html! {
        <tr>
            <td>{ bill.kind.clone() }</td>
            <td>{ bill.name.clone() }</td>
            <td>{ bill.date.clone() }</td>
            <td>{ bill.amount.clone() }</td>
            <td>{ bill.status.clone() }</td>
            <td>
                <div
                    class="icon-actions"
                    data-testid="icon-eye"
                    data-bill-url={file_url}
                    onclick={onclick}
                >
                    { icon_eye() }
                </div>
            </td>
        </tr>
    }
}

/// Receipt preview. The element keeps its identity across renders;
/// presenting it is a matter of the `show` class plus the image source.
fn receipt_modal(preview: Option<&str>, on_close: Callback<MouseEvent>) -> Html {
    let shown = preview.is_some();
    html! {
        <div
            id="modaleFile"
            class={classes!("modal", "fade", shown.then_some("show"))}
            style={if shown { "display: block;" } else { "display: none;" }}
        >
            <div class="modal-dialog modal-lg">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Justificatif"}</h5>
                        <button type="button" class="close" onclick={on_close}>{"×"}</button>
                    </div>
                    <div class="modal-body">
                        {
                            if let Some(url) = preview {
                                html! { <img src={url.to_string()} alt="Bill" style="max-width: 100%" /> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Employee shell: vertical icon rail on the left, view content beside it.
/// Exactly one icon carries `active-icon`, or none for iconless paths.
pub fn vertical_layout(active: Option<NavIcon>, content: Html) -> Html {
    html! {
        <div class="layout">
            <div class="vertical-navbar">
                <div class="layout-title">{"Claimdesk"}</div>
                <div
                    id="layout-icon1"
                    data-testid="icon-window"
                    class={classes!(matches!(active, Some(NavIcon::Window)).then_some("active-icon"))}
                >
                    { icon_window() }
                </div>
                <div
                    id="layout-icon2"
                    data-testid="icon-mail"
                    class={classes!(matches!(active, Some(NavIcon::Mail)).then_some("active-icon"))}
                >
                    { icon_mail() }
                </div>
            </div>
            <div class="layout-content">{ content }</div>
        </div>
    }
}

/// Default view. Authentication itself is handled elsewhere; this only has
/// to stand in whenever no other view matches or no session is stored.
pub fn login_view() -> Html {
    html! {
        <div class="login-page">
            <div class="login-title">{"Claimdesk"}</div>
            <form class="login-form" data-testid="form-employee">
                <label for="employee-email">{"Adresse e-mail"}</label>
                <input
                    id="employee-email"
                    type="email"
                    data-testid="employee-email-input"
                    placeholder="nom@entreprise.tld"
                />
                <label for="employee-password">{"Mot de passe"}</label>
                <input
                    id="employee-password"
                    type="password"
                    data-testid="employee-password-input"
                />
                <button type="submit" data-testid="employee-login-button" class="btn btn-primary">
                    {"Se connecter"}
                </button>
            </form>
        </div>
    }
}

pub fn new_bill_view() -> Html {
    html! {
        <div class="content">
            <div class="content-header">
                <div class="content-title">{"Envoyer une note de frais"}</div>
            </div>
            <form data-testid="form-new-bill" class="form-new-bill">
                <label for="expense-name">{"Nom de la dépense"}</label>
                <input id="expense-name" type="text" data-testid="expense-name" />
                <label for="datepicker">{"Date"}</label>
                <input id="datepicker" type="date" data-testid="datepicker" />
                <label for="amount">{"Montant TTC"}</label>
                <input id="amount" type="number" data-testid="amount" />
                <label for="file">{"Justificatif"}</label>
                <input id="file" type="file" data-testid="file" />
                <button type="submit" id="btn-send-bill" class="btn btn-primary">
                    {"Envoyer"}
                </button>
            </form>
        </div>
    }
}

pub fn dashboard_view() -> Html {
    html! {
        <div class="content">
            <div class="content-header">
                <div class="content-title">{"Validations"}</div>
            </div>
            <div id="arrow-icons-container" data-testid="dashboard-container"></div>
        </div>
    }
}

fn icon_eye() -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z" />
            <circle cx="12" cy="12" r="3" />
        </svg>
    }
}

fn icon_window() -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <rect x="3" y="3" width="18" height="18" rx="2" ry="2" />
            <line x1="3" y1="9" x2="21" y2="9" />
            <line x1="9" y1="21" x2="9" y2="9" />
        </svg>
    }
}

fn icon_mail() -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
            <polyline points="22,6 12,13 2,6" />
        </svg>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use yew::platform::time::sleep;
    use yew::prelude::*;

    use super::*;
    use crate::routes::{self, route_path};

    wasm_bindgen_test_configure!(run_in_browser);

    fn display_bill(id: &str, date: &str) -> DisplayBill {
        DisplayBill {
            id: id.to_string(),
            kind: "Transports".to_string(),
            name: format!("facture {id}"),
            date: date.to_string(),
            raw_date: date.to_string(),
            amount: "100 €".to_string(),
            status: "En attente".to_string(),
            file_url: Some("https://test.storage.tld/justificatif.jpg".to_string()),
            date_malformed: false,
        }
    }

    #[derive(Properties, PartialEq)]
    struct HostProps {
        content: Html,
    }

    #[function_component(Host)]
    fn host(props: &HostProps) -> Html {
        props.content.clone()
    }

    fn mount(content: Html) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Host>::with_root_and_props(root.clone(), HostProps { content }).render();
        root
    }

    fn click(root: &web_sys::Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_ref::<web_sys::HtmlElement>()
            .unwrap()
            .click();
    }

    #[derive(Properties, PartialEq)]
    struct BillsHarnessProps {
        bills: Vec<DisplayBill>,
        on_new_bill: Callback<MouseEvent>,
        on_eye_spy: Callback<String>,
    }

    /// Drives `bills_view` the way the bills page does: clicking an eye icon
    /// records the url and presents the modal.
    #[function_component(BillsHarness)]
    fn bills_harness(props: &BillsHarnessProps) -> Html {
        let preview = use_state(|| None::<String>);
        let on_eye = {
            let preview = preview.clone();
            let spy = props.on_eye_spy.clone();
            Callback::from(move |url: String| {
                spy.emit(url.clone());
                preview.set(Some(url));
            })
        };
        let on_close = {
            let preview = preview.clone();
            Callback::from(move |_: MouseEvent| preview.set(None))
        };
        bills_view(
            &BillsViewState::Loaded(props.bills.clone()),
            props.on_new_bill.clone(),
            on_eye,
            on_close,
            preview.as_deref(),
        )
    }

    #[wasm_bindgen_test]
    async fn loading_state_renders_the_loading_text() {
        let root = mount(loading_view());
        sleep(Duration::from_millis(20)).await;
        let loading = root.query_selector("#loading").unwrap().unwrap();
        assert!(loading
            .text_content()
            .unwrap_or_default()
            .contains("Loading..."));
    }

    #[wasm_bindgen_test]
    async fn error_state_renders_the_message_verbatim() {
        let root = mount(error_view("Erreur 404"));
        sleep(Duration::from_millis(20)).await;
        let message = root
            .query_selector("[data-testid='error-message']")
            .unwrap()
            .unwrap();
        assert!(message
            .text_content()
            .unwrap_or_default()
            .contains("Erreur 404"));
    }

    #[wasm_bindgen_test]
    async fn date_column_reads_latest_first() {
        let bills = vec![
            display_bill("a", "2004-04-04"),
            display_bill("b", "2003-03-03"),
            display_bill("c", "2002-02-02"),
        ];
        let root = mount(html! {
            <BillsHarness
                bills={bills}
                on_new_bill={Callback::noop()}
                on_eye_spy={Callback::noop()}
            />
        });
        sleep(Duration::from_millis(20)).await;
        let cells = root
            .query_selector_all("tbody tr td:nth-child(3)")
            .unwrap();
        let mut dates = Vec::new();
        for index in 0..cells.length() {
            dates.push(cells.item(index).unwrap().text_content().unwrap_or_default());
        }
        assert_eq!(dates, ["2004-04-04", "2003-03-03", "2002-02-02"]);
    }

    #[wasm_bindgen_test]
    async fn eye_click_presents_the_modal() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let root = mount(html! {
            <BillsHarness
                bills={vec![display_bill("a", "2004-04-04")]}
                on_new_bill={Callback::noop()}
                on_eye_spy={Callback::from(move |url: String| sink.borrow_mut().push(url))}
            />
        });
        sleep(Duration::from_millis(20)).await;

        let modal = root.query_selector("#modaleFile").unwrap().unwrap();
        assert!(!modal.class_list().contains("show"));

        click(&root, "[data-testid='icon-eye']");
        sleep(Duration::from_millis(20)).await;

        assert_eq!(seen.borrow().len(), 1);
        let modal = root.query_selector("#modaleFile").unwrap().unwrap();
        assert!(modal.class_list().contains("show"));
        let image = root.query_selector("#modaleFile img").unwrap().unwrap();
        assert_eq!(
            image.get_attribute("src").unwrap_or_default(),
            "https://test.storage.tld/justificatif.jpg"
        );
    }

    #[wasm_bindgen_test]
    async fn new_bill_button_triggers_navigation_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let root = mount(html! {
            <BillsHarness
                bills={Vec::<DisplayBill>::new()}
                on_new_bill={Callback::from(move |_: MouseEvent| {
                    sink.borrow_mut().push(route_path::NEW_BILL.to_string())
                })}
                on_eye_spy={Callback::noop()}
            />
        });
        sleep(Duration::from_millis(20)).await;

        click(&root, "[data-testid='btn-new-bill']");
        sleep(Duration::from_millis(20)).await;

        assert_eq!(*seen.borrow(), vec![route_path::NEW_BILL.to_string()]);
    }

    #[wasm_bindgen_test]
    async fn bills_path_highlights_only_the_window_icon() {
        let root = mount(vertical_layout(
            routes::active_icon(route_path::BILLS),
            html! {},
        ));
        sleep(Duration::from_millis(20)).await;

        let active = root.query_selector_all(".active-icon").unwrap();
        assert_eq!(active.length(), 1);
        let icon = active
            .item(0)
            .unwrap()
            .dyn_into::<web_sys::Element>()
            .unwrap();
        assert_eq!(
            icon.get_attribute("data-testid").unwrap_or_default(),
            "icon-window"
        );
    }
}
