//! The rotation: an immutable list of pictures, a cursor into it, and a
//! timer that moves the cursor along.

use log::debug;
use slowcore::timer::RepeatingTimer;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long each picture stays on screen.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Something a picture can be shown on.
pub trait Display {
    fn show_image(&mut self, path: &Path);
}

pub struct Slideshow {
    images: Vec<PathBuf>,
    /// Index of the picture the next tick will show
    current: usize,
    timer: RepeatingTimer,
}

impl Slideshow {
    pub fn new(images: Vec<PathBuf>) -> Self {
        Self {
            images,
            current: 0,
            timer: RepeatingTimer::new(SLIDE_INTERVAL),
        }
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Start rotating and show the first picture right away, without
    /// waiting for the first tick. With nothing to show the timer is
    /// never started.
    pub fn start(&mut self, now: Instant, display: &mut impl Display) {
        if self.images.is_empty() {
            return;
        }
        self.timer.start(now);
        self.show_next(display);
    }

    /// Show the picture under the cursor, then advance the cursor,
    /// wrapping to the first picture after the last.
    pub fn show_next(&mut self, display: &mut impl Display) {
        if self.images.is_empty() {
            return;
        }
        let path = &self.images[self.current];
        debug!("showing [{}/{}] {}", self.current + 1, self.images.len(), path.display());
        display.show_image(path);

        self.current += 1;
        if self.current >= self.images.len() {
            self.current = 0;
        }
    }

    /// Run a tick if one is due. Returns whether the picture changed.
    pub fn poll(&mut self, now: Instant, display: &mut impl Display) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.show_next(display);
        true
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }
}
