/// Applying a computed URL to the browsing context
use log::{info, warn};

use crate::error::{Error, Result};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Full navigation of the current tab
    CurrentTab,
    NewTab,
}

impl NavigationTarget {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.open_in_new_tab {
            NavigationTarget::NewTab
        } else {
            NavigationTarget::CurrentTab
        }
    }
}

pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<()>;
}

/// The two window operations navigation needs
pub trait BrowserWindow {
    fn set_href(&self, url: &str) -> Result<()>;

    /// Open `url` in a new tab. `Ok(false)` means the popup blocker refused.
    fn open_new_tab(&self, url: &str) -> Result<bool>;
}

fn navigation_failed(url: &str, e: wasm_bindgen::JsValue) -> Error {
    Error::Navigation {
        url: url.to_string(),
        reason: format!("{:?}", e),
    }
}

impl BrowserWindow for web_sys::Window {
    fn set_href(&self, url: &str) -> Result<()> {
        self.location()
            .set_href(url)
            .map_err(|e| navigation_failed(url, e))
    }

    fn open_new_tab(&self, url: &str) -> Result<bool> {
        self.open_with_url_and_target(url, "_blank")
            .map(|opened| opened.is_some())
            .map_err(|e| navigation_failed(url, e))
    }
}

/// Navigate `window` to `url`. A blocked new tab falls back to the current
/// one: toggles relayed from the service worker carry no user activation.
pub fn navigate_window(window: &impl BrowserWindow, target: NavigationTarget, url: &str) -> Result<()> {
    info!("Switching to {} ({:?})", url, target);

    match target {
        NavigationTarget::CurrentTab => window.set_href(url),
        NavigationTarget::NewTab => {
            if window.open_new_tab(url)? {
                Ok(())
            } else {
                warn!("New tab for {} was blocked, using the current tab", url);
                window.set_href(url)
            }
        }
    }
}

/// Navigates the real `window`
pub struct WindowNavigator {
    target: NavigationTarget,
}

impl WindowNavigator {
    pub fn new(target: NavigationTarget) -> Self {
        WindowNavigator { target }
    }
}

impl Navigator for WindowNavigator {
    fn navigate(&self, url: &str) -> Result<()> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        navigate_window(&window, self.target, url)
    }
}
