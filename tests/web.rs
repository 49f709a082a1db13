//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use tab_lister::markup::render_entry;
use tab_lister::results::{DomResults, ResultsContainer};
use tab_lister::tab_data::{QueryFilter, TabInfo};
use tab_lister::tab_query::TabSource;
use tab_lister::{ListerConfig, ListerError};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct FixedTabs(Vec<&'static str>);

impl TabSource for FixedTabs {
    async fn query(&self, _filter: QueryFilter) -> tab_lister::Result<Vec<TabInfo>> {
        Ok(self.0.iter().map(|t| TabInfo::with_title(t)).collect())
    }
}

fn add_element(tag: &str, id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn item_texts(list: &web_sys::Element) -> Vec<String> {
    let items = list.children();
    (0..items.length())
        .filter_map(|i| items.item(i))
        .map(|item| item.text_content().unwrap_or_default())
        .collect()
}

/// Let pending tasks and the Yew scheduler run
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn dom_results_clear_and_append() {
    let list = add_element("ul", "results-clear-append");
    list.set_inner_html("<li>stale</li>");

    let mut results = DomResults::find("results-clear-append").unwrap();
    results.clear();
    results.append_markup(&render_entry("First"));
    results.append_markup(&render_entry("<b>Second</b>"));

    assert_eq!(list.children().length(), 2);
    assert_eq!(item_texts(&list), vec!["First", "<b>Second</b>"]);
}

#[wasm_bindgen_test]
fn missing_results_container() {
    let err = DomResults::find("no-such-results").err();
    assert_eq!(err, Some(ListerError::RenderTargetMissing("no-such-results".to_string())));
}

#[wasm_bindgen_test]
fn bind_without_button_fails() {
    add_element("ul", "results-no-button");
    let config = ListerConfig {
        button_id: "no-such-button".to_string(),
        results_id: "results-no-button".to_string(),
        ..ListerConfig::default()
    };

    let err = tab_lister::lister::bind_tab_lister(&config).err();
    assert_eq!(err, Some(ListerError::RenderTargetMissing("no-such-button".to_string())));
}

#[wasm_bindgen_test]
async fn button_click_rebuilds_results() {
    let button = add_element("button", "click-button");
    let list = add_element("ul", "click-results");
    list.set_inner_html("<li>stale one</li><li>stale two</li><li>stale three</li>");

    let config = ListerConfig {
        button_id: "click-button".to_string(),
        results_id: "click-results".to_string(),
        ..ListerConfig::default()
    };
    tab_lister::lister::bind_tab_lister_with(&config, FixedTabs(vec!["Inbox", "<i>Docs</i>"]))
        .unwrap();

    button.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
    next_tick().await;

    let results = DomResults::find("click-results").unwrap();
    assert_eq!(item_texts(results.element()), vec!["Inbox", "<i>Docs</i>"]);
    assert!(results.element().query_selector("i").unwrap().is_none());
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let err = tab_lister::start_tab_lister(JsValue::from_f64(5.0)).unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Invalid config"));

    let err = tab_lister::start_app(JsValue::from_str("my-app")).unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Invalid config"));
}

#[wasm_bindgen_test]
async fn mount_replaces_content_once() {
    let missing = ListerConfig {
        mount_id: "no-such-mount".to_string(),
        ..ListerConfig::default()
    };
    assert!(matches!(
        tab_lister::ui::mount_app(&missing),
        Err(ListerError::RenderTargetMissing(_))
    ));

    let target = add_element("div", "mount-once");
    target.set_inner_html("<p class=\"stale\">loading</p>");
    let config = ListerConfig {
        mount_id: "mount-once".to_string(),
        ..ListerConfig::default()
    };

    assert!(tab_lister::ui::mount_app(&config).is_ok());
    next_tick().await;

    let rendered = target.inner_html();
    assert!(target.query_selector(".stale").unwrap().is_none());
    assert_eq!(
        target.query_selector("h1").unwrap().and_then(|h| h.text_content()),
        Some("Open Tabs".to_string())
    );
    assert!(target.text_content().unwrap_or_default().contains("List tabs"));

    assert!(matches!(
        tab_lister::ui::mount_app(&config),
        Err(ListerError::AlreadyMounted(_))
    ));
    next_tick().await;
    assert_eq!(target.inner_html(), rendered);
}
