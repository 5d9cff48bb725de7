//! `setTimeout` handle with last-write-wins rescheduling.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Default)]
pub struct Timeout {
    handle: Option<i32>,
    // Kept alive until the next schedule/cancel.
    callback: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// Run `f` after `ms`, cancelling any pending run.
    pub fn schedule(&mut self, ms: i32, f: impl FnOnce() + 'static) {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut f = Some(f);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.callback = Some(closure);
            }
            Err(e) => web_sys::console::warn_1(&format!("setTimeout failed: {e:?}").into()),
        }
    }

    pub fn cancel(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
        self.callback = None;
    }
}
