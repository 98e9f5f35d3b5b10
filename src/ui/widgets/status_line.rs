//! Spinner-backed status line
//!
//! Renders one live line on stderr. When animation is on, a ticker thread
//! redraws the spinner; the foreground thread only swaps the message.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use provisio::domain::ports::StatusLine;

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::widgets::spinner::Spinner;

const TICK: Duration = Duration::from_millis(100);

struct State {
    spinner: Spinner,
    region: LiveRegion,
    prefix: String,
    active: bool,
}

pub struct SpinnerStatusLine {
    ui: UiContext,
    state: Arc<Mutex<State>>,
    stop: Arc<AtomicBool>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl SpinnerStatusLine {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            state: Arc::new(Mutex::new(State {
                spinner: Spinner::new(""),
                region: LiveRegion::new(),
                prefix: String::new(),
                active: false,
            })),
            stop: Arc::new(AtomicBool::new(false)),
            ticker: Mutex::new(None),
        }
    }

    /// Show `prefix` with a spinner; later updates are appended to it.
    pub fn start(&self, prefix: &str) {
        {
            let mut state = lock(&self.state);
            state.prefix = prefix.to_string();
            state.spinner.set_message(prefix);
            state.active = true;
            self.draw(&mut state);
        }

        if !self.ui.animation {
            return;
        }
        self.stop.store(false, Ordering::SeqCst);
        let state = Arc::clone(&self.state);
        let stop = Arc::clone(&self.stop);
        let unicode = self.ui.unicode;
        let handle = thread::spawn(move || {
            while !stop.load(Ordering::SeqCst) {
                thread::sleep(TICK);
                let mut state = lock(&state);
                if !state.active {
                    break;
                }
                state.spinner.tick();
                let line = state.spinner.render(unicode);
                let _ = state.region.update(&mut io::stderr(), &line);
            }
        });
        *lock(&self.ticker) = Some(handle);
    }

    /// Replace the spinner with a success line.
    pub fn succeed(&self, message: &str) {
        self.finish(|spinner, ui| spinner.succeed(message, ui.color, ui.unicode));
    }

    /// Replace the spinner with a failure line.
    pub fn fail(&self, message: &str) {
        self.finish(|spinner, ui| spinner.fail(message, ui.color, ui.unicode));
    }

    fn finish<F: FnOnce(&Spinner, &UiContext) -> String>(&self, render: F) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = lock(&self.ticker).take() {
            let _ = handle.join();
        }

        let mut state = lock(&self.state);
        if !state.active {
            return;
        }
        state.active = false;
        let line = render(&state.spinner, &self.ui);
        let mut err = io::stderr();
        if self.ui.animation {
            let _ = state.region.update(&mut err, &line);
        } else {
            let _ = writeln!(err, "{}", line);
        }
    }

    fn draw(&self, state: &mut State) {
        let mut err = io::stderr();
        if self.ui.animation {
            let line = state.spinner.render(self.ui.unicode);
            let _ = state.region.update(&mut err, &line);
        } else {
            let _ = writeln!(err, "{}", state.spinner.message());
        }
    }
}

impl StatusLine for SpinnerStatusLine {
    fn update(&self, status: &str) {
        let mut state = lock(&self.state);
        if !state.active {
            return;
        }
        let message = format!("{}{}", state.prefix, status);
        if state.spinner.message() == message {
            return;
        }
        state.spinner.set_message(message);
        // Without animation every change becomes its own line, so only print on change.
        self.draw(&mut state);
    }
}

impl Drop for SpinnerStatusLine {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = lock(&self.ticker).take() {
            let _ = handle.join();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
