//! Repaint scheduling for timer-driven apps.
//!
//! egui is an immediate-mode GUI: a frame only runs when something asks
//! for one. `RepaintController` records why each frame ran and, at the end
//! of the frame, asks egui to wake up exactly when the next timer tick is
//! due. Between ticks, with no input, the app does not repaint at all.
//!
//! Call [`RepaintController::begin_frame`] at the top of `update()` and
//! [`RepaintController::end_frame`] at the bottom.

use std::time::Duration;

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse move, key press, scroll).
    Input,
    /// Woken by a scheduled repaint or the window manager (resize, expose).
    Scheduled,
}

#[derive(Debug)]
pub struct RepaintController {
    /// Frame counter (0 = first frame).
    frame: u64,
    /// Why the current frame is being painted (set by begin_frame).
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| !i.events.is_empty() || i.pointer.is_moving());
        self.reason = classify(self.frame, had_input);
    }

    /// Schedules the next wake-up. `next_tick` is the time left until the
    /// app's timer fires, `None` if no timer is running.
    pub fn end_frame(&mut self, ctx: &egui::Context, next_tick: Option<Duration>) {
        self.frame += 1;
        if let Some(delay) = next_tick {
            ctx.request_repaint_after(delay);
        }
        // else: no scheduled repaint — egui sleeps until next input.
    }
}

fn classify(frame: u64, had_input: bool) -> RepaintReason {
    if frame == 0 {
        RepaintReason::Init
    } else if had_input {
        RepaintReason::Input
    } else {
        RepaintReason::Scheduled
    }
}
