use dnahelix::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

const SPINNER_TICK_MS: u64 = 80;
const IDLE_LABEL: &str = "Working";

struct BarState {
    bar: ProgressBar,
    phase: Option<&'static str>,
}

impl BarState {
    fn label(&self) -> &'static str {
        self.phase.unwrap_or(IDLE_LABEL)
    }

    fn apply(&mut self, event: Progress) {
        match event {
            Progress::PhaseStart { name } => {
                self.phase = Some(name);
                self.bar.reset();
                self.bar.set_length(0);
                self.bar.set_style(spinner_style());
                self.bar.set_message(name);
                self.bar
                    .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::TaskStart { total_steps } => {
                // Rows are the unit of work; switch from spinner to a counted bar
                // but keep the phase name visible.
                self.bar.disable_steady_tick();
                self.bar.reset();
                self.bar.set_style(bar_style());
                self.bar.set_length(total_steps);
                self.bar.set_message(self.label());
            }
            Progress::TaskAdvance { steps } => self.bar.inc(steps),
            Progress::TaskFinish => {
                if let Some(total) = self.bar.length() {
                    self.bar.set_position(total);
                }
            }
            Progress::PhaseFinish => {
                self.bar.disable_steady_tick();
                self.bar.finish_with_message(format!("✓ {}", self.label()));
                self.phase = None;
            }
            Progress::Message(msg) => {
                debug!("{}", msg);
                self.bar.println(format!("  {}", msg));
            }
        }
    }
}

/// Renders core progress events on stderr: a spinner per phase, switching to
/// a counted bar while a task runs.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<BarState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        Self {
            state: Arc::new(Mutex::new(BarState { bar, phase: None })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = Arc::clone(&self.state);
        Box::new(move |event: Progress| match state.lock() {
            Ok(mut state) => state.apply(event),
            Err(_) => warn!("Progress state mutex was poisoned. Dropping progress event."),
        })
    }

    #[cfg(test)]
    fn snapshot(&self) -> (String, u64, Option<u64>, bool) {
        let state = self.state.lock().unwrap();
        (
            state.bar.message(),
            state.bar.position(),
            state.bar.length(),
            state.bar.is_finished(),
        )
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{msg:<22} [{bar:40.cyan/blue}] {human_pos}/{human_len} rows ({per_sec}, {eta})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("##-")
}
