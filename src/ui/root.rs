/// App root and its one-time mount onto the page

use std::cell::Cell;

use yew::prelude::*;
use crate::config::ListerConfig;
use crate::error::{ListerError, Result};
use crate::results::find_element;
use crate::ui::app::App;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Root component; owns the tree and delegates to [`App`]
#[function_component(Root)]
pub fn root() -> Html {
    html! { <App /> }
}

/// Mount [`Root`] onto the configured element, replacing its content.
///
/// The page is mounted at most once; later calls fail with `AlreadyMounted`.
pub fn mount_app(config: &ListerConfig) -> Result<yew::AppHandle<Root>> {
    if MOUNTED.with(Cell::get) {
        return Err(ListerError::AlreadyMounted(config.mount_id.clone()));
    }

    let target = find_element(&config.mount_id)?;
    let handle = yew::Renderer::<Root>::with_root(target).render();
    MOUNTED.with(|mounted| mounted.set(true));

    log::info!("App mounted on #{}", config.mount_id);
    Ok(handle)
}
