/// Tab Lister: query the current window's tabs and render their titles

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use crate::config::ListerConfig;
use crate::error::{ListerError, Result};
use crate::markup::render_entry;
use crate::results::{DomResults, ResultsContainer, find_element};
use crate::tab_data::QueryFilter;
use crate::tab_query::{BrowserTabs, TabSource};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

/// Outcome of one completed query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rendered {
    pub ticket: u64,
    pub entries: usize,
    /// A newer request had already rendered when this one completed
    pub out_of_order: bool,
}

/// Renders tab titles into a results container on demand.
///
/// Overlapping `load_tabs` calls are not serialized: whichever response
/// completes last owns the container, even if it was issued first.
/// Such renders are flagged in the returned [`Rendered`] and logged.
pub struct TabLister<S, C> {
    source: S,
    container: RefCell<C>,
    filter: QueryFilter,
    issued: Cell<u64>,
    last_rendered: Cell<u64>,
}

impl<S: TabSource, C: ResultsContainer> TabLister<S, C> {
    pub fn new(source: S, container: C, filter: QueryFilter) -> TabLister<S, C> {
        TabLister {
            source,
            container: RefCell::new(container),
            filter,
            issued: Cell::new(0),
            last_rendered: Cell::new(0),
        }
    }

    pub fn container(&self) -> Ref<'_, C> {
        self.container.borrow()
    }

    /// Query tabs and replace the container content with one entry per title.
    ///
    /// On failure the container keeps its previous content.
    pub async fn load_tabs(&self) -> Result<Rendered> {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);

        let tabs = self.source.query(self.filter).await?;

        let previous = self.last_rendered.get();
        let out_of_order = previous > ticket;
        if out_of_order {
            log::warn!(
                "Tab query #{} completed after #{} and overwrites its results",
                ticket,
                previous
            );
        }

        let mut container = self.container.borrow_mut();
        container.clear();
        for tab in &tabs {
            container.append_markup(&render_entry(&tab.title));
        }
        self.last_rendered.set(ticket);

        Ok(Rendered {
            ticket,
            entries: tabs.len(),
            out_of_order,
        })
    }
}

/// Run `load_tabs`, logging failures instead of surfacing them to the page
pub async fn load_and_log<S: TabSource, C: ResultsContainer>(lister: &TabLister<S, C>) {
    match lister.load_tabs().await {
        Ok(rendered) => log::debug!("Rendered {} tabs (query #{})", rendered.entries, rendered.ticket),
        Err(e) => log::error!("Could not list tabs: {}", e),
    }
}

/// Attach the lister to the configured button and results container
pub fn bind_tab_lister(config: &ListerConfig) -> Result<()> {
    bind_tab_lister_with(config, BrowserTabs)
}

/// Same as [`bind_tab_lister`], answering queries from `source`
pub fn bind_tab_lister_with<S: TabSource + 'static>(config: &ListerConfig, source: S) -> Result<()> {
    let button = find_element(&config.button_id)?;
    let results = DomResults::find(&config.results_id)?;

    let lister = Rc::new(TabLister::new(source, results, config.query_filter()));

    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
        let lister = lister.clone();
        spawn_local(async move {
            load_and_log(&*lister).await;
        });
    });

    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| {
            ListerError::RenderTargetMissing(format!("{} (listener rejected: {:?})", config.button_id, e))
        })?;

    // The handler lives as long as the page
    on_click.forget();

    log::info!(
        "Tab lister bound to #{} -> #{}",
        config.button_id,
        config.results_id
    );
    Ok(())
}
