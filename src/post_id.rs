/// Post identifier lookup, used to deep-link into the post's edit screen
use std::sync::LazyLock;

use regex::Regex;

use crate::page::{PageSource, Selector};

/// Hidden field in the comment form
pub const COMMENT_POST_ID: Selector = Selector::tag("input")
    .with_id("comment_post_ID")
    .with_attr("value");

pub const SHORTLINK: Selector = Selector::tag("link")
    .with_attr_value("rel", "shortlink")
    .with_attr("href");

pub const BODY: Selector = Selector::tag("body").with_attr("class");

/// Jetpack's wp.me shortlinks carry an encoded id, not `?p=`
const EXTERNAL_SHORTENER: &str = "//wp.me/";
const SHORTLINK_QUERY: &str = "/?p=";

static BODY_CLASS_POST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"postid-([^ ]*)").expect("valid regex"));

/// Find the current post's id, first source that yields one wins:
/// comment form field, then shortlink, then body class.
pub fn infer_post_id(page: &impl PageSource) -> Option<String> {
    post_id_from_comment_form(page)
        .or_else(|| post_id_from_shortlink(page))
        .or_else(|| post_id_from_body_class(page))
}

pub fn post_id_from_comment_form(page: &impl PageSource) -> Option<String> {
    page.query_first(&COMMENT_POST_ID)
        .and_then(|input| input.attribute("value").map(str::to_string))
        .filter(|value| !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()))
}

pub fn post_id_from_shortlink(page: &impl PageSource) -> Option<String> {
    let link = page.query_first(&SHORTLINK)?;
    let href = link.attribute("href")?;

    if href.contains(EXTERNAL_SHORTENER) {
        return None;
    }

    href.find(SHORTLINK_QUERY)
        .map(|position| href[position + SHORTLINK_QUERY.len()..].to_string())
        .filter(|id| !id.is_empty())
}

pub fn post_id_from_body_class(page: &impl PageSource) -> Option<String> {
    let body = page.query_first(&BODY)?;

    BODY_CLASS_POST_ID
        .captures(body.attribute("class")?)
        .map(|captures| captures[1].to_string())
        .filter(|id| !id.is_empty())
}
