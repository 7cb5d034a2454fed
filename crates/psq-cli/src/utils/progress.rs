use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use psq::engine::progress::{Progress, ProgressCallback};
use tracing::debug;

const BAR_TEMPLATE: &str = "{prefix:<24} [{bar:40.cyan/blue}] {pos}/{len} channels";

/// Shows channel-scoring progress as an `indicatif` bar on stderr.
///
/// Per-channel `Message` events are printed above the bar, including those
/// sent after the bar has finished.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        Self {
            bar: ProgressBar::with_draw_target(None, target).with_style(style),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                debug!("Phase started: {}", name);
                bar.set_prefix(name);
            }
            Progress::PhaseFinish => {}
            Progress::TaskStart { total_steps } => {
                bar.reset();
                bar.set_length(total_steps);
            }
            Progress::TaskIncrement => bar.inc(1),
            Progress::TaskFinish => {
                if let Some(total) = bar.length() {
                    bar.set_position(total);
                }
                bar.finish_and_clear();
            }
            Progress::Message(msg) => bar.println(format!("  {}", msg)),
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
