//! Single transient status banner: visible, then fading, then gone.

use std::time::{Duration, Instant};

pub const BANNER_VISIBLE_FOR: Duration = Duration::from_secs(5);
pub const BANNER_FADE_FOR: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: StatusSeverity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: StatusSeverity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: StatusSeverity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerPhase {
    Visible,
    /// `remaining` runs from 1.0 down to 0.0 over the fade interval.
    FadingOut { remaining: f32 },
    Removed,
}

#[derive(Debug, Clone)]
struct ActiveBanner {
    message: StatusMessage,
    shown_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct StatusBanner {
    active: Option<ActiveBanner>,
}

impl StatusBanner {
    /// Replaces whatever is showing and restarts the dismissal timer.
    pub fn show(&mut self, message: StatusMessage, now: Instant) {
        self.active = Some(ActiveBanner {
            message,
            shown_at: now,
        });
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.active.as_ref().map(|banner| &banner.message)
    }

    pub fn phase_at(&self, now: Instant) -> BannerPhase {
        let Some(banner) = &self.active else {
            return BannerPhase::Removed;
        };

        let elapsed = now.saturating_duration_since(banner.shown_at);
        if elapsed < BANNER_VISIBLE_FOR {
            return BannerPhase::Visible;
        }

        let fading = elapsed - BANNER_VISIBLE_FOR;
        if fading < BANNER_FADE_FOR {
            let remaining = 1.0 - fading.as_secs_f32() / BANNER_FADE_FOR.as_secs_f32();
            BannerPhase::FadingOut { remaining }
        } else {
            BannerPhase::Removed
        }
    }

    /// Drops the banner from layout once its fade has finished.
    pub fn tick(&mut self, now: Instant) -> BannerPhase {
        let phase = self.phase_at(now);
        if phase == BannerPhase::Removed {
            self.active = None;
        }
        phase
    }

    /// Time until the next phase change, for scheduling a repaint.
    pub fn next_transition_in(&self, now: Instant) -> Option<Duration> {
        let banner = self.active.as_ref()?;
        let elapsed = now.saturating_duration_since(banner.shown_at);
        let fade_end = BANNER_VISIBLE_FOR + BANNER_FADE_FOR;
        if elapsed < BANNER_VISIBLE_FOR {
            Some(BANNER_VISIBLE_FOR - elapsed)
        } else if elapsed < fade_end {
            Some(Duration::from_millis(16).min(fade_end - elapsed))
        } else {
            Some(Duration::ZERO)
        }
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
