/// Content script entry points: message handling, keyboard shortcut, toggle
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::DomPage;
use crate::error::Error;
use crate::keyboard::{is_toggle_shortcut, KeyPress};
use crate::message::ToggleMessage;
use crate::navigator::{NavigationTarget, Navigator, WindowNavigator};
use crate::page::PageSource;
use crate::resolver::{Destination, Switcher};
use crate::settings::Settings;
use crate::storage::load_settings;

/// Compute the destination for the page and hand it to `navigator`
pub fn switch<P: PageSource>(switcher: &Switcher<P>, navigator: &impl Navigator) -> Result<Destination, Error> {
    let destination = switcher.destination();
    debug!(
        "Leaving {:?} for {:?} at {}",
        destination.from,
        destination.to(),
        destination.url
    );

    navigator.navigate(&destination.url)?;
    Ok(destination)
}

/// Switch to/from the WordPress admin on the live page
#[wasm_bindgen]
pub async fn toggle() -> Result<(), JsValue> {
    let settings = load_settings().await.unwrap_or_else(|e| {
        warn!("Using default settings: {}", e);
        Settings::default()
    });

    let switcher = Switcher::new(DomPage::from_window()?);
    let navigator = WindowNavigator::new(NavigationTarget::from_settings(&settings));

    switch(&switcher, &navigator)?;
    Ok(())
}

/// Receive a message relayed by the service worker
#[wasm_bindgen]
pub async fn handle_toggle_request(message: JsValue) -> Result<(), JsValue> {
    let message: ToggleMessage = match serde_wasm_bindgen::from_value(message) {
        Ok(message) => message,
        Err(e) => {
            warn!("Ignoring unrecognised message: {}", e);
            return Ok(());
        }
    };

    if !message.requests_toggle() {
        debug!("Message does not request a toggle");
        return Ok(());
    }

    toggle().await
}

/// Listen for Cmd/Ctrl + Shift + A on the page itself
#[wasm_bindgen]
pub fn bind_keyboard_shortcut() -> Result<(), JsValue> {
    let document = web_sys::window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)?;

    let listener = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if is_toggle_shortcut(&KeyPress::from_event(&event)) {
            spawn_local(async {
                if let Err(e) = toggle().await {
                    error!("Toggle failed: {:?}", e);
                }
            });
        }
    }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

    document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;

    // The listener lives as long as the page
    listener.forget();
    Ok(())
}
