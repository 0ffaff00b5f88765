//! Loading spinner shown while the user list is being fetched.
//!
//! The spinner animates by scheduling its own [`TickMsg`] after every frame.
//! Each spinner has a unique id and a tag that increases per frame, so stray
//! ticks from another spinner, or duplicated ticks, are ignored instead of
//! speeding the animation up.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A set of animation frames and the delay between them.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Animation frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames; smaller is faster.
    pub fps: Duration,
}

/// Small braille dots.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    fps: Duration::from_millis(83),
});

/// Message that advances one spinner by a frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Spinner the tick belongs to.
    pub id: i64,
    /// Frame tag the tick was scheduled for.
    pub tag: i64,
}

/// Spinner state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Frames and timing.
    pub spinner: Spinner,
    /// Style applied to each frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a spinner using [`MINI_DOT`].
    pub fn new() -> Self {
        Self {
            spinner: MINI_DOT.clone(),
            style: Style::new().foreground(Color::from("205")),
            frame: 0,
            id: next_id(),
            tag: 0,
        }
    }

    /// This spinner's id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// A tick for the current frame, for starting the animation by hand.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Schedules the next frame.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.spinner.fps, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Advances on a matching tick and schedules the following one.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if tick.id != self.id || tick.tag != self.tag {
            return None;
        }
        self.frame = (self.frame + 1) % self.spinner.frames.len().max(1);
        self.tag += 1;
        Some(self.tick())
    }

    /// The current frame.
    pub fn view(&self) -> String {
        match self.spinner.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Model::new().id(), Model::new().id());
    }

    #[test]
    fn test_matching_tick_advances_frame() {
        let mut s = Model::new();
        assert_eq!(strip_ansi_escapes::strip_str(s.view()), "⠋");
        let msg: Msg = Box::new(s.tick_msg());
        assert!(s.update(&msg).is_some());
        assert_eq!(strip_ansi_escapes::strip_str(s.view()), "⠙");
    }

    #[test]
    fn test_stale_or_foreign_ticks_are_ignored() {
        let mut s = Model::new();
        let stale: Msg = Box::new(s.tick_msg());
        assert!(s.update(&stale).is_some());
        assert!(s.update(&stale).is_none());

        let other = Model::new();
        let foreign: Msg = Box::new(other.tick_msg());
        assert!(s.update(&foreign).is_none());
        assert_eq!(strip_ansi_escapes::strip_str(s.view()), "⠙");
    }
}
