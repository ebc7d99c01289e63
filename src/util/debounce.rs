use std::sync::{Arc, Mutex};
use wasm_bindgen::JsCast;

/// Trailing-edge debounce over `window.setTimeout`.
///
/// Each `schedule` clears the pending timer, so only the callback of the
/// last call within the quiet period runs.
#[derive(Clone)]
pub(crate) struct Debouncer {
    delay_ms: i32,
    timer: Arc<Mutex<Option<i32>>>,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            timer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let Some(win) = web_sys::window() else {
            return;
        };

        self.cancel();

        let timer = self.timer.clone();
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
            if let Ok(mut slot) = timer.lock() {
                *slot = None;
            }
            f();
        });

        let tid = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                self.delay_ms,
            )
            .ok();

        if let Ok(mut slot) = self.timer.lock() {
            *slot = tid;
        }
    }

    pub fn cancel(&self) {
        let Ok(mut slot) = self.timer.lock() else {
            return;
        };
        if let Some(tid) = slot.take() {
            if let Some(win) = web_sys::window() {
                win.clear_timeout_with_handle(tid);
            }
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.timer.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

/// Run `f` once after `delay_ms`.
pub(crate) fn defer(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let cb = wasm_bindgen::closure::Closure::once_into_js(f);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms,
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_typing_burst_fires_once_with_last_value() {
        let debouncer = Debouncer::new(500);
        let sent: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let mut typed = String::new();
        for ch in "Hello".chars() {
            typed.push(ch);
            let value = typed.clone();
            let sent = sent.clone();
            debouncer.schedule(move || sent.borrow_mut().push(value));
            TimeoutFuture::new(50).await;
        }

        assert!(debouncer.is_pending());
        assert!(sent.borrow().is_empty());

        TimeoutFuture::new(600).await;
        assert_eq!(*sent.borrow(), vec!["Hello".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[wasm_bindgen_test]
    async fn test_cancel_drops_pending_call() {
        let debouncer = Debouncer::new(100);
        let fired = Rc::new(RefCell::new(false));

        let f = fired.clone();
        debouncer.schedule(move || *f.borrow_mut() = true);
        debouncer.cancel();

        TimeoutFuture::new(200).await;
        assert!(!*fired.borrow());
    }
}
