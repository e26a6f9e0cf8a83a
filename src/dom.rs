/// `PageSource` backed by the live document
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::{Error, Result};
use crate::page::{PageElement, PageLocation, PageSource, Selector};

pub struct DomPage {
    document: Document,
    location: PageLocation,
}

impl DomPage {
    /// Snapshot the current window's location and attach to its document
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        let href = window
            .location()
            .href()
            .map_err(|e| Error::Location(format!("{:?}", e)))?;

        Ok(DomPage {
            document,
            location: PageLocation::parse(&href)?,
        })
    }
}

fn snapshot(element: &Element) -> PageElement {
    let names: js_sys::Array = element.get_attribute_names();

    names
        .iter()
        .filter_map(|name| name.as_string())
        .fold(PageElement::new(&element.tag_name()), |page_element, name| {
            match element.get_attribute(&name) {
                Some(value) => page_element.with_attr(&name, &value),
                None => page_element,
            }
        })
}

impl PageSource for DomPage {
    fn location(&self) -> &PageLocation {
        &self.location
    }

    fn query_all(&self, selector: &Selector) -> Vec<PageElement> {
        let nodes = match self.document.query_selector_all(&selector.css()) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!("Selector {} rejected: {:?}", selector.css(), e);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| snapshot(&element))
            .collect()
    }

    fn query_first(&self, selector: &Selector) -> Option<PageElement> {
        match self.document.query_selector(&selector.css()) {
            Ok(element) => element.map(|element| snapshot(&element)),
            Err(e) => {
                warn!("Selector {} rejected: {:?}", selector.css(), e);
                None
            }
        }
    }
}
