/// Results container the tab titles are written into

use crate::error::{ListerError, Result};
use web_sys::Element;

/// A page region that can be cleared and appended to
pub trait ResultsContainer {
    fn clear(&mut self);

    fn append_markup(&mut self, fragment: &str);
}

/// Results container backed by a DOM element
pub struct DomResults {
    element: Element,
}

impl DomResults {
    pub fn new(element: Element) -> DomResults {
        DomResults { element }
    }

    /// Look up the container by element id in the current document
    pub fn find(id: &str) -> Result<DomResults> {
        find_element(id).map(DomResults::new)
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ResultsContainer for DomResults {
    fn clear(&mut self) {
        self.element.set_inner_html("");
    }

    fn append_markup(&mut self, fragment: &str) {
        if let Err(e) = self.element.insert_adjacent_html("beforeend", fragment) {
            log::error!("Failed to append to #{}: {:?}", self.element.id(), e);
        }
    }
}

/// Find an element by id, reporting a missing window or document the same way
pub fn find_element(id: &str) -> Result<Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| ListerError::RenderTargetMissing(id.to_string()))
}

/// In-memory container recording every fragment appended since the last clear
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryResults {
    pub entries: Vec<String>,
    pub clears: usize,
}

#[cfg(test)]
impl ResultsContainer for MemoryResults {
    fn clear(&mut self) {
        self.entries.clear();
        self.clears += 1;
    }

    fn append_markup(&mut self, fragment: &str) {
        self.entries.push(fragment.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_results_clear_then_append() {
        let mut results = MemoryResults::default();
        results.append_markup("<li>old</li>");

        results.clear();
        results.append_markup("<li>new</li>");

        assert_eq!(results.entries, vec!["<li>new</li>".to_string()]);
        assert_eq!(results.clears, 1);
    }
}
