//! Window timers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::timing::timer_delay;

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout<F>(window: &Window, ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(f);
    let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timer_delay(ms),
    );
    if scheduled.is_ok() {
        closure.forget();
    }
}

/// A repeating timer, cleared when dropped.
pub struct Interval {
    window: Window,
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start<F>(window: &Window, ms: u32, f: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::<dyn FnMut()>::wrap(Box::new(f));
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timer_delay(ms),
        )?;
        Ok(Self {
            window: window.clone(),
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}
