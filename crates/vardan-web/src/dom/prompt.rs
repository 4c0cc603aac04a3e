//! Browser dialogs, toast notifications and link opening.

use web_sys::Window;

use vardan_commerce::cart::{LinkOpener, Prompter};

use super::timers::set_timeout;
use crate::selectors::NOTIFICATION_CLASS;

const NOTIFICATION_MS: u32 = 2_000;

/// `window.confirm` / `window.alert` plus a toast for notifications.
pub struct BrowserPrompter {
    window: Window,
}

impl BrowserPrompter {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Prompter for BrowserPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn notify(&mut self, message: &str) {
        let Some(document) = self.window.document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let selector = format!(".{}", NOTIFICATION_CLASS);
        if let Ok(Some(previous)) = document.query_selector(&selector) {
            previous.remove();
        }
        let Ok(toast) = document.create_element("div") else {
            return;
        };
        toast.set_class_name(NOTIFICATION_CLASS);
        toast.set_text_content(Some(message));
        let _ = toast.set_attribute("role", "status");
        if body.append_child(&toast).is_err() {
            return;
        }
        set_timeout(&self.window, NOTIFICATION_MS, move || toast.remove());
    }
}

/// Opens order links in a new tab.
pub struct WindowOpener {
    window: Window,
}

impl WindowOpener {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl LinkOpener for WindowOpener {
    fn open(&mut self, url: &str) {
        let _ = self.window.open_with_url_and_target(url, "_blank");
    }
}
