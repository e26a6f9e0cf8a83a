/// Front-end and admin URL resolution
///
/// Both resolvers walk a fixed fallback chain and always produce a URL. The
/// last tier guesses from the origin, which is wrong for subdirectory
/// multisite installs but at least lands somewhere on the right host.
use log::debug;

use crate::admin_bar::{first_admin_bar_url, ADMIN_LINKS, FRONT_END_LINKS};
use crate::mode::{classify_mode, Mode, ADMIN_MARKER, LOGIN_MARKER};
use crate::page::{PageLocation, PageSource};
use crate::page_links::{infer_url_from_page_links, url_before_marker};
use crate::post_id::infer_post_id;

const ADMIN_PATH: &str = "wp-admin/";

/// Add a trailing slash to a URL if it doesn't already have one
pub fn trailing_slash_it(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Strip the admin or login part off the current href
pub fn front_end_url_from_location(location: &PageLocation) -> Option<String> {
    [ADMIN_MARKER, LOGIN_MARKER]
        .iter()
        .find_map(|marker| url_before_marker(location.href(), marker))
}

pub fn resolve_front_end_url(page: &impl PageSource) -> String {
    if let Some(url) = first_admin_bar_url(page, &FRONT_END_LINKS) {
        debug!("Front end URL from admin bar: {}", url);
        return url;
    }

    if let Some(url) = front_end_url_from_location(page.location()) {
        debug!("Front end URL from location: {}", url);
        return url;
    }

    let origin = page.location().origin();
    debug!("Front end URL falling back to origin: {}", origin);
    origin
}

/// Edit screen URL for `post_id` under an admin base URL
pub fn edit_post_url(admin_url: &str, post_id: &str) -> String {
    format!("{}post.php?post={}&action=edit", admin_url, post_id)
}

pub fn resolve_admin_url(page: &impl PageSource) -> String {
    if let Some(url) = first_admin_bar_url(page, &ADMIN_LINKS) {
        debug!("Admin URL from admin bar: {}", url);
        return url;
    }

    if let Some(root) = infer_url_from_page_links(page) {
        let admin_url = trailing_slash_it(&root) + ADMIN_PATH;

        return match infer_post_id(page) {
            Some(post_id) => {
                debug!("Admin URL from page links, editing post {}", post_id);
                edit_post_url(&admin_url, &post_id)
            }
            None => {
                debug!("Admin URL from page links: {}", admin_url);
                admin_url
            }
        };
    }

    let admin_url = trailing_slash_it(&page.location().origin()) + ADMIN_PATH;
    debug!("Admin URL falling back to origin: {}", admin_url);
    admin_url
}

/// Where a toggle goes, and which side it started from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub from: Mode,
    pub url: String,
}

impl Destination {
    /// The side `url` belongs to
    pub fn to(&self) -> Mode {
        self.from.opposite()
    }
}

/// The URL inference engine, bound to one page
pub struct Switcher<P> {
    page: P,
}

impl<P: PageSource> Switcher<P> {
    pub fn new(page: P) -> Switcher<P> {
        Switcher { page }
    }

    pub fn classify_mode(&self) -> Mode {
        classify_mode(self.page.location().pathname())
    }

    pub fn resolve_front_end_url(&self) -> String {
        resolve_front_end_url(&self.page)
    }

    pub fn resolve_admin_url(&self) -> String {
        resolve_admin_url(&self.page)
    }

    /// Compute the opposite side's URL. Only the chain for that side runs.
    pub fn destination(&self) -> Destination {
        let from = self.classify_mode();
        let url = match from {
            Mode::Admin => self.resolve_front_end_url(),
            Mode::FrontEnd => self.resolve_admin_url(),
        };

        Destination { from, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageElement, StaticPage};

    fn admin_bar_item(page: StaticPage, item_id: &str, href: &str) -> StaticPage {
        page.with_child(
            PageElement::new("li").with_attr("id", item_id),
            PageElement::new("a")
                .with_attr("class", "ab-item")
                .with_attr("href", href),
        )
    }

    fn stylesheet(href: &str) -> PageElement {
        PageElement::new("link")
            .with_attr("rel", "stylesheet")
            .with_attr("href", href)
    }

    fn shortlink(href: &str) -> PageElement {
        PageElement::new("link")
            .with_attr("rel", "shortlink")
            .with_attr("href", href)
    }

    #[test]
    fn test_trailing_slash_it() {
        assert_eq!(trailing_slash_it("http://example.com"), "http://example.com/");
        assert_eq!(trailing_slash_it("http://example.com/"), "http://example.com/");
        assert_eq!(
            trailing_slash_it(&trailing_slash_it("http://example.com")),
            "http://example.com/"
        );
    }

    #[test]
    fn test_front_end_from_location() {
        let page = StaticPage::new("https://example.com/wp-admin/post.php?post=5&action=edit").unwrap();

        assert_eq!(resolve_front_end_url(&page), "https://example.com");
    }

    #[test]
    fn test_front_end_from_login() {
        let page = StaticPage::new("https://example.com/blog/wp-login.php?redirect_to=x").unwrap();

        assert_eq!(resolve_front_end_url(&page), "https://example.com/blog");
    }

    #[test]
    fn test_front_end_admin_marker_before_login_marker() {
        let page = StaticPage::new("https://example.com/a/wp-login.php/b/wp-admin/").unwrap();

        assert_eq!(resolve_front_end_url(&page), "https://example.com/a/wp-login.php/b");
    }

    #[test]
    fn test_front_end_prefers_admin_bar() {
        let page = StaticPage::new("https://example.com/wp-admin/post.php?post=5&action=edit").unwrap();
        let page = admin_bar_item(page, "wp-admin-bar-view", "https://example.com/my-post/");

        assert_eq!(resolve_front_end_url(&page), "https://example.com/my-post/");
    }

    #[test]
    fn test_front_end_origin_fallback() {
        let page = StaticPage::new("https://example.com/some/page/").unwrap();

        assert_eq!(resolve_front_end_url(&page), "https://example.com");
    }

    #[test]
    fn test_admin_prefers_edit_link() {
        let page = StaticPage::new("https://example.com/my-post/").unwrap();
        let page = admin_bar_item(page, "wp-admin-bar-site-name", "https://example.com/wp-admin/");
        let page = admin_bar_item(page, "wp-admin-bar-edit", "https://example.com/wp-admin/post.php?post=9&action=edit");
        let page = page.with(stylesheet("https://other.example.com/wp-content/style.css"));

        assert_eq!(
            resolve_admin_url(&page),
            "https://example.com/wp-admin/post.php?post=9&action=edit"
        );
    }

    #[test]
    fn test_admin_from_page_links_with_post_id() {
        let page = StaticPage::new("https://example.com/hello-world/")
            .unwrap()
            .with(stylesheet("https://example.com/wp-content/themes/x/style.css"))
            .with(shortlink("https://example.com/?p=42"));

        assert_eq!(
            resolve_admin_url(&page),
            "https://example.com/wp-admin/post.php?post=42&action=edit"
        );
    }

    #[test]
    fn test_admin_from_page_links_without_post_id() {
        let page = StaticPage::new("https://example.com/blog/")
            .unwrap()
            .with(stylesheet("https://example.com/blog/wp-includes/css/dashicons.css"));

        assert_eq!(resolve_admin_url(&page), "https://example.com/blog/wp-admin/");
    }

    #[test]
    fn test_admin_origin_fallback() {
        let page = StaticPage::new("https://example.com/some/page/").unwrap();

        assert_eq!(resolve_admin_url(&page), "https://example.com/wp-admin/");
    }

    #[test]
    fn test_admin_origin_fallback_ignores_post_id() {
        let page = StaticPage::new("https://example.com/some/page/")
            .unwrap()
            .with(shortlink("https://example.com/?p=42"));

        assert_eq!(resolve_admin_url(&page), "https://example.com/wp-admin/");
    }

    #[test]
    fn test_destination_from_admin() {
        // Edit link present, but only the front-end chain may run
        let page = StaticPage::new("https://example.com/wp-admin/post.php?post=5&action=edit").unwrap();
        let page = admin_bar_item(page, "wp-admin-bar-edit", "https://example.com/wp-admin/post.php?post=5&action=edit");
        let switcher = Switcher::new(page);

        assert_eq!(
            switcher.destination(),
            Destination {
                from: Mode::Admin,
                url: "https://example.com".to_string(),
            }
        );
        assert_eq!(switcher.destination().to(), Mode::FrontEnd);
    }

    #[test]
    fn test_destination_from_front_end() {
        // View link present, but only the admin chain may run
        let page = StaticPage::new("https://example.com/my-post/").unwrap();
        let page = admin_bar_item(page, "wp-admin-bar-view", "https://example.com/my-post/");
        let switcher = Switcher::new(page);

        assert_eq!(
            switcher.destination(),
            Destination {
                from: Mode::FrontEnd,
                url: "https://example.com/wp-admin/".to_string(),
            }
        );
        assert_eq!(switcher.destination().to(), Mode::Admin);
    }
}
