/// Reusable UI components

use yew::prelude::*;
use crate::tab_data::TabInfo;

#[derive(Properties, PartialEq)]
pub struct TabTitleListProps {
    pub tabs: Vec<TabInfo>,
    #[prop_or_default]
    pub empty_message: Option<String>,
}

/// Tab titles as list items; Yew inserts them as text nodes
#[function_component(TabTitleList)]
pub fn tab_title_list(props: &TabTitleListProps) -> Html {
    if props.tabs.is_empty() {
        return match &props.empty_message {
            Some(msg) => html! { <p class="empty-message">{msg}</p> },
            None => html! {},
        };
    }

    html! {
        <ul class="tab-title-list">
            {for props.tabs.iter().map(|tab| html! {
                <li class="tab-title">{&tab.title}</li>
            })}
        </ul>
    }
}
