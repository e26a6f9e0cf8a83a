/// Links taken straight from the WordPress admin bar
use crate::page::{PageSource, Selector};

const fn admin_bar_link(item_id: &'static str) -> Selector {
    Selector::tag("a")
        .with_class("ab-item")
        .with_attr("href")
        .child_of(item_id)
}

pub const VIEW: Selector = admin_bar_link("wp-admin-bar-view");
pub const PREVIEW: Selector = admin_bar_link("wp-admin-bar-preview");
pub const SITE_NAME: Selector = admin_bar_link("wp-admin-bar-site-name");
pub const EDIT: Selector = admin_bar_link("wp-admin-bar-edit");

/// Candidates for leaving the admin, most specific first: the post being
/// edited, its preview, then the site home.
pub const FRONT_END_LINKS: [Selector; 3] = [VIEW, PREVIEW, SITE_NAME];

/// Candidates for entering the admin: the edit screen, then the dashboard.
pub const ADMIN_LINKS: [Selector; 2] = [EDIT, SITE_NAME];

/// Raw `href` of the admin bar anchor matching `selector`
pub fn url_from_admin_bar(page: &impl PageSource, selector: &Selector) -> Option<String> {
    page.query_first(selector)
        .and_then(|anchor| anchor.attribute("href").map(str::to_string))
        .filter(|href| !href.is_empty())
}

/// First candidate that resolves, in priority order
pub fn first_admin_bar_url(page: &impl PageSource, candidates: &[Selector]) -> Option<String> {
    candidates
        .iter()
        .find_map(|selector| url_from_admin_bar(page, selector))
}
