//! Typewriter-style progressive text reveal.

use crate::animation::Teardown;
use std::fmt;
use std::time::Duration;

/// Where a [`TextReveal`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not started
    Idle,
    /// Waiting for the start delay to elapse
    Scheduled { starts_at: Duration },
    /// Interval running; the next character appears at `next_tick`
    Revealing { next_tick: Duration },
    /// Full text visible, completion fired
    Complete,
    /// Torn down before completion
    Cancelled,
}

impl RevealPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RevealPhase::Complete | RevealPhase::Cancelled)
    }
}

type CompletionFn = Box<dyn FnMut() + Send>;

/// Reveals a string one character per interval after a start delay.
///
/// Time is supplied by the host as a monotonic `now`. Coalesced calls to
/// [`TextReveal::advance`] catch up one interval at a time, so the cursor
/// never skips and completion fires at most once per run.
pub struct TextReveal {
    text: String,
    len: usize,
    cursor: usize,
    per_char: Duration,
    delay: Duration,
    phase: RevealPhase,
    on_complete: Option<CompletionFn>,
}

impl TextReveal {
    pub fn new(text: impl Into<String>, per_char: Duration, delay: Duration) -> Self {
        let text = text.into();
        Self {
            len: text.chars().count(),
            text,
            cursor: 0,
            per_char,
            delay,
            phase: RevealPhase::Idle,
            on_complete: None,
        }
    }

    /// Registers the completion callback.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Schedules the reveal from an empty cursor. Ignored while a run is
    /// pending or already complete; a cancelled reveal starts over.
    pub fn start(&mut self, now: Duration) {
        if matches!(self.phase, RevealPhase::Idle | RevealPhase::Cancelled) {
            self.cursor = 0;
            self.phase = RevealPhase::Scheduled {
                starts_at: now + self.delay,
            };
        }
    }

    /// Replaces the text and timing and starts over from an empty cursor.
    ///
    /// Any pending delay or running interval from the previous run is dropped.
    pub fn restart(
        &mut self,
        text: impl Into<String>,
        per_char: Duration,
        delay: Duration,
        now: Duration,
    ) {
        self.text = text.into();
        self.len = self.text.chars().count();
        self.cursor = 0;
        self.per_char = per_char;
        self.delay = delay;
        self.phase = RevealPhase::Idle;
        self.start(now);
    }

    /// Processes every interval due by `now`. Returns true if the reveal
    /// completed during this call.
    pub fn advance(&mut self, now: Duration) -> bool {
        loop {
            match self.phase {
                RevealPhase::Scheduled { starts_at } => {
                    if now < starts_at {
                        return false;
                    }
                    self.phase = RevealPhase::Revealing {
                        next_tick: starts_at + self.per_char,
                    };
                }
                RevealPhase::Revealing { next_tick } => {
                    if self.per_char.is_zero() {
                        self.cursor = self.len;
                        return self.complete();
                    }
                    if now < next_tick {
                        return false;
                    }
                    if self.cursor < self.len {
                        self.cursor += 1;
                    }
                    if self.cursor >= self.len {
                        return self.complete();
                    }
                    self.phase = RevealPhase::Revealing {
                        next_tick: next_tick + self.per_char,
                    };
                }
                RevealPhase::Idle | RevealPhase::Complete | RevealPhase::Cancelled => {
                    return false;
                }
            }
        }
    }

    fn complete(&mut self) -> bool {
        self.phase = RevealPhase::Complete;
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        true
    }

    /// Characters revealed so far.
    pub fn visible_text(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(index, _)| index);
        &self.text[..end]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RevealPhase::Complete
    }
}

impl Teardown for TextReveal {
    fn teardown(&mut self) {
        if !self.phase.is_terminal() {
            tracing::debug!(cursor = self.cursor, "text reveal cancelled");
            self.phase = RevealPhase::Cancelled;
        }
    }

    fn has_active_resources(&self) -> bool {
        matches!(
            self.phase,
            RevealPhase::Scheduled { .. } | RevealPhase::Revealing { .. }
        )
    }
}

impl fmt::Debug for TextReveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextReveal")
            .field("text", &self.text)
            .field("cursor", &self.cursor)
            .field("per_char", &self.per_char)
            .field("delay", &self.delay)
            .field("phase", &self.phase)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}
