/// WP Admin Switcher - browser extension that jumps between a WordPress
/// site's front end and its admin
/// Built with Rust + WASM + Yew

pub mod admin_bar;
pub mod content;
pub mod dom;
pub mod error;
pub mod keyboard;
pub mod message;
pub mod mode;
pub mod navigator;
pub mod page;
pub mod page_links;
pub mod post_id;
pub mod resolver;
pub mod settings;
mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use resolver::{Destination, Switcher};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export mode classification for the JavaScript glue
#[wasm_bindgen]
pub fn is_admin_mode(pathname: &str) -> bool {
    mode::is_admin_mode(pathname)
}

// Start the Yew app for the options page
#[wasm_bindgen]
pub fn start_options() {
    yew::Renderer::<ui::options::OptionsPage>::new().render();
}
