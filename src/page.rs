/// Read-only view of the loaded page: its location and the elements the
/// switcher inspects.
///
/// The engine only ever talks to [`PageSource`], so it runs the same against
/// the live document (`dom::DomPage`) and against an in-memory [`StaticPage`].
use url::Url;

/// Structural selector for the handful of element shapes the switcher reads
///
/// Covers `#parent > tag#id.class[attr="value"][attr]`, which is all the
/// admin bar, resource links and post id lookups need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    tag: &'static str,
    id: Option<&'static str>,
    class: Option<&'static str>,
    parent_id: Option<&'static str>,
    attr_value: Option<(&'static str, &'static str)>,
    has_attr: Option<&'static str>,
}

impl Selector {
    pub const fn tag(tag: &'static str) -> Selector {
        Selector {
            tag,
            id: None,
            class: None,
            parent_id: None,
            attr_value: None,
            has_attr: None,
        }
    }

    pub const fn with_id(self, id: &'static str) -> Selector {
        Selector { id: Some(id), ..self }
    }

    pub const fn with_class(self, class: &'static str) -> Selector {
        Selector { class: Some(class), ..self }
    }

    /// Only match direct children of the element with this id
    pub const fn child_of(self, parent_id: &'static str) -> Selector {
        Selector { parent_id: Some(parent_id), ..self }
    }

    pub const fn with_attr_value(self, name: &'static str, value: &'static str) -> Selector {
        Selector { attr_value: Some((name, value)), ..self }
    }

    pub const fn with_attr(self, name: &'static str) -> Selector {
        Selector { has_attr: Some(name), ..self }
    }

    /// Render as a CSS selector for `querySelectorAll`
    pub fn css(&self) -> String {
        let mut css = String::new();

        if let Some(parent_id) = self.parent_id {
            css.push_str(&format!("#{} > ", parent_id));
        }

        css.push_str(self.tag);

        if let Some(id) = self.id {
            css.push_str(&format!("#{}", id));
        }
        if let Some(class) = self.class {
            css.push_str(&format!(".{}", class));
        }
        if let Some((name, value)) = self.attr_value {
            css.push_str(&format!("[{}=\"{}\"]", name, value));
        }
        if let Some(name) = self.has_attr {
            css.push_str(&format!("[{}]", name));
        }

        css
    }

    /// Does `element` (whose parent is `parent`) match this selector?
    pub fn matches(&self, element: &PageElement, parent: Option<&PageElement>) -> bool {
        if !element.tag.eq_ignore_ascii_case(self.tag) {
            return false;
        }

        if let Some(id) = self.id {
            if element.attribute("id") != Some(id) {
                return false;
            }
        }

        if let Some(class) = self.class {
            if !element.has_class(class) {
                return false;
            }
        }

        if let Some((name, value)) = self.attr_value {
            if element.attribute(name) != Some(value) {
                return false;
            }
        }

        if let Some(name) = self.has_attr {
            if element.attribute(name).is_none() {
                return false;
            }
        }

        match self.parent_id {
            Some(parent_id) => parent.is_some_and(|p| p.attribute("id") == Some(parent_id)),
            None => true,
        }
    }
}

/// Snapshot of one element's tag and attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl PageElement {
    pub fn new(tag: &str) -> PageElement {
        PageElement {
            tag: tag.to_lowercase(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> PageElement {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Raw attribute value, as `getAttribute` would return it
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map_or(false, |classes| classes.split_ascii_whitespace().any(|c| c == class))
    }
}

/// The page's current URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(href: &str) -> Result<PageLocation, url::ParseError> {
        Url::parse(href).map(|url| PageLocation { url })
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    /// Scheme, host and port with no trailing slash, like `location.origin`
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// Resolve an attribute value against this page, the way the DOM
    /// `href`/`src` properties do. Unresolvable values come back unchanged.
    pub fn resolve(&self, value: &str) -> String {
        self.url
            .join(value)
            .map(String::from)
            .unwrap_or_else(|_| value.to_string())
    }
}

/// Capability the switcher needs from a page
pub trait PageSource {
    fn location(&self) -> &PageLocation;

    /// All matching elements in document order
    fn query_all(&self, selector: &Selector) -> Vec<PageElement>;

    fn query_first(&self, selector: &Selector) -> Option<PageElement> {
        self.query_all(selector).into_iter().next()
    }
}

#[derive(Debug, Clone)]
struct StaticNode {
    element: PageElement,
    parent: Option<PageElement>,
}

/// In-memory page: a location plus a flat, document-ordered element list
#[derive(Debug, Clone)]
pub struct StaticPage {
    location: PageLocation,
    nodes: Vec<StaticNode>,
}

impl StaticPage {
    pub fn new(href: &str) -> Result<StaticPage, url::ParseError> {
        Ok(StaticPage {
            location: PageLocation::parse(href)?,
            nodes: Vec::new(),
        })
    }

    pub fn with(mut self, element: PageElement) -> StaticPage {
        self.nodes.push(StaticNode { element, parent: None });
        self
    }

    /// Add `element` as a direct child of `parent`
    pub fn with_child(mut self, parent: PageElement, element: PageElement) -> StaticPage {
        self.nodes.push(StaticNode {
            element,
            parent: Some(parent),
        });
        self
    }
}

impl PageSource for StaticPage {
    fn location(&self) -> &PageLocation {
        &self.location
    }

    fn query_all(&self, selector: &Selector) -> Vec<PageElement> {
        self.nodes
            .iter()
            .filter(|node| selector.matches(&node.element, node.parent.as_ref()))
            .map(|node| node.element.clone())
            .collect()
    }
}
