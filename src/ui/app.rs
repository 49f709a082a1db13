/// The named child component rendered by the app root

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::tab_data::{QueryFilter, TabInfo};
use crate::tab_query::{BrowserTabs, TabSource};
use crate::ui::components::TabTitleList;

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading(String),
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Idle);
    let tabs = use_state(Vec::<TabInfo>::new);
    let loaded = use_state(|| false);

    let on_list = {
        let state = state.clone();
        let tabs = tabs.clone();
        let loaded = loaded.clone();

        Callback::from(move |_| {
            let state = state.clone();
            let tabs = tabs.clone();
            let loaded = loaded.clone();

            state.set(AppState::Loading("Querying tabs...".to_string()));

            spawn_local(async move {
                match BrowserTabs.query(QueryFilter::default()).await {
                    Ok(result) => {
                        tabs.set(result);
                        loaded.set(true);
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        log::error!("App could not list tabs: {}", e);
                        state.set(AppState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    let is_busy = !matches!(*state, AppState::Idle);

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Open Tabs"}</h1>

            <Button onclick={on_list} disabled={is_busy} variant={ButtonVariant::Secondary} block={true}>
                {"List tabs"}
            </Button>

            {match &*state {
                AppState::Loading(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            if *loaded {
                <TabTitleList
                    tabs={(*tabs).clone()}
                    empty_message={Some("No tabs in this window".to_string())}
                />
            }
        </div>
    }
}
