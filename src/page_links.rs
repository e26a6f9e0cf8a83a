/// Site root inference from the page's resource links
///
/// `home_url()` can't be read off `location` on subdirectory installs, so we
/// look for the point where an asset URL crosses into WordPress' own
/// directories and keep everything before it.
use crate::page::{PageSource, Selector};

pub const CONTENT_MARKER: &str = "/wp-content/";
pub const INCLUDES_MARKER: &str = "/wp-includes/";

/// Tried per element, in this order
const MARKERS: [&str; 2] = [CONTENT_MARKER, INCLUDES_MARKER];

/// Resource link categories in priority order, paired with the attribute
/// holding their URL.
pub const LINK_CATEGORIES: [(Selector, &str); 4] = [
    (
        Selector::tag("link")
            .with_attr_value("rel", "stylesheet")
            .with_attr("href"),
        "href",
    ),
    (Selector::tag("script").with_attr("src"), "src"),
    (
        Selector::tag("link")
            .with_attr_value("type", "application/rss+xml")
            .with_attr("href"),
        "href",
    ),
    (
        Selector::tag("link")
            .with_attr_value("rel", "pingback")
            .with_attr("href"),
        "href",
    ),
];

/// Everything in `url` strictly before the first `marker`
pub fn url_before_marker(url: &str, marker: &str) -> Option<String> {
    url.find(marker).map(|position| url[..position].to_string())
}

/// Infer the site root from stylesheet, script, RSS and pingback links
pub fn infer_url_from_page_links(page: &impl PageSource) -> Option<String> {
    let location = page.location();

    LINK_CATEGORIES.iter().find_map(|(selector, attribute)| {
        page.query_all(selector).iter().find_map(|element| {
            let url = location.resolve(element.attribute(attribute)?);

            MARKERS
                .iter()
                .find_map(|marker| url_before_marker(&url, marker))
                .filter(|root| !root.is_empty())
        })
    })
}
