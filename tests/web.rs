//! Browser tests for the DOM-backed page. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use wp_admin_switcher::dom::DomPage;
use wp_admin_switcher::page::PageSource;
use wp_admin_switcher::{admin_bar, page_links, post_id};

wasm_bindgen_test_configure!(run_in_browser);

fn set_head(html: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.head().unwrap().set_inner_html(html);
}

fn set_body(html: &str, class: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(html);
    body.set_class_name(class);
}

#[wasm_bindgen_test]
fn test_location_snapshot() {
    let page = DomPage::from_window().unwrap();
    let href = web_sys::window().unwrap().location().href().unwrap();

    assert_eq!(page.location().href(), href);
}

#[wasm_bindgen_test]
fn test_admin_bar_lookup() {
    set_body(
        r#"<div id="wpadminbar"><ul>
            <li id="wp-admin-bar-site-name"><a class="ab-item" href="https://example.com/">Site</a></li>
            <li id="wp-admin-bar-view"><a class="ab-item" href="https://example.com/post/">View</a></li>
        </ul></div>"#,
        "",
    );
    let page = DomPage::from_window().unwrap();

    assert_eq!(
        admin_bar::first_admin_bar_url(&page, &admin_bar::FRONT_END_LINKS),
        Some("https://example.com/post/".to_string())
    );
}

#[wasm_bindgen_test]
fn test_page_links_and_post_id() {
    set_head(
        r#"<link rel="stylesheet" href="https://example.com/wp-content/themes/x/style.css">
           <link rel="shortlink" href="https://example.com/?p=42">"#,
    );
    set_body("", "single postid-42");
    let page = DomPage::from_window().unwrap();

    assert_eq!(
        page_links::infer_url_from_page_links(&page),
        Some("https://example.com".to_string())
    );
    assert_eq!(post_id::infer_post_id(&page), Some("42".to_string()));
}
