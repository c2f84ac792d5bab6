use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use bookinn_common::config::Config;
use indicatif::{ProgressBar, ProgressStyle};

/// The bar currently on screen, if any. Log lines go through it.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn active() -> Option<ProgressBar> {
    ACTIVE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Progress over the input files of one command. Cleared on drop.
pub struct FileProgress {
    bar: ProgressBar,
}

impl FileProgress {
    pub fn tick(&self, path: &Path) {
        self.bar.set_message(path.display().to_string());
        self.bar.inc(1);
    }
}

impl Drop for FileProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
        ACTIVE.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

/// Starts a bar over `len` files. Hidden for a single file and at `-qq`.
pub fn start(len: usize, cfg: &Config) -> FileProgress {
    let bar: ProgressBar = if len < 2 || cfg.quiet > 1 {
        ProgressBar::hidden()
    } else {
        let style = ProgressStyle::with_template("{spinner:.blue} [{bar:32.green/white}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▆▁");
        let bar = ProgressBar::new(len as u64);
        bar.set_style(style);
        bar
    };

    *ACTIVE.lock().unwrap_or_else(PoisonError::into_inner) = Some(bar.clone());
    FileProgress { bar }
}

/// Writer handed to the tracing subscriber.
pub struct ProgressWriter;

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match active().filter(|bar| !bar.is_hidden()) {
            Some(bar) => {
                let msg = String::from_utf8_lossy(buf);
                bar.println(msg.trim_end());
                Ok(buf.len())
            }
            None => std::io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
