//! # Reminder State Module
//!
//! Delayed, self-dismissing reminder popups offered after a registration.
//!
//! ## Lifecycle:
//! 1. `schedule()` records a pending reminder due `delay` after acceptance
//! 2. `poll()` (once per frame) promotes due reminders to the active list
//! 3. `ActiveReminder::phase()` drives the fade-in, hold and fade-out
//! 4. Finished reminders are discarded on the next poll
//!
//! Every reminder belongs to a `SessionToken`. Closing the session drops its
//! pending and active reminders, so a reminder never outlives the login that
//! asked for it. Nothing here sleeps or spawns threads; the UI asks
//! `next_wakeup()` how long it may idle before the next repaint.

use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::config::ReminderConfig;

/// Identifies one login session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

/// What the popup says
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Full name, or username when none was given
    pub student_name: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub location: String,
}

impl Reminder {
    pub fn greeting(&self) -> String {
        format!("Hi {}, you registered for:", self.student_name)
    }

    pub fn details(&self) -> String {
        format!("{}  •  {}  •  {}", self.event_name, self.event_date, self.location)
    }
}

/// Where a shown reminder is in its animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReminderPhase {
    FadingIn(f32),
    Visible,
    FadingOut(f32),
    Finished,
}

impl ReminderPhase {
    /// Opacity in 0.0..=1.0
    pub fn alpha(&self) -> f32 {
        match self {
            ReminderPhase::FadingIn(alpha) | ReminderPhase::FadingOut(alpha) => *alpha,
            ReminderPhase::Visible => 1.0,
            ReminderPhase::Finished => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingReminder {
    session: SessionToken,
    due: Instant,
    reminder: Reminder,
}

/// A reminder currently on screen
#[derive(Debug, Clone)]
pub struct ActiveReminder {
    pub reminder: Reminder,
    session: SessionToken,
    shown_at: Instant,
    fade: Duration,
    hold: Duration,
}

impl ActiveReminder {
    pub fn phase(&self, now: Instant) -> ReminderPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);

        if elapsed < self.fade {
            return ReminderPhase::FadingIn(fraction(elapsed, self.fade));
        }
        if elapsed < self.hold {
            return ReminderPhase::Visible;
        }

        let fading_for = elapsed - self.hold;
        if fading_for < self.fade {
            ReminderPhase::FadingOut(1.0 - fraction(fading_for, self.fade))
        } else {
            ReminderPhase::Finished
        }
    }
}

fn fraction(part: Duration, whole: Duration) -> f32 {
    if whole.is_zero() {
        return 1.0;
    }
    (part.as_secs_f32() / whole.as_secs_f32()).clamp(0.0, 1.0)
}

/// Frame-polled scheduler for reminder popups
#[derive(Debug)]
pub struct ReminderScheduler {
    config: ReminderConfig,
    next_session: u64,
    live_sessions: HashSet<SessionToken>,
    pending: Vec<PendingReminder>,
    active: Vec<ActiveReminder>,
}

impl ReminderScheduler {
    pub fn new(config: ReminderConfig) -> Self {
        Self {
            config,
            next_session: 0,
            live_sessions: HashSet::new(),
            pending: Vec::new(),
            active: Vec::new(),
        }
    }

    pub fn open_session(&mut self) -> SessionToken {
        self.next_session += 1;
        let token = SessionToken(self.next_session);
        self.live_sessions.insert(token);
        token
    }

    /// Forget a session and everything it scheduled
    pub fn close_session(&mut self, token: SessionToken) {
        self.live_sessions.remove(&token);

        let before = self.pending.len() + self.active.len();
        self.pending.retain(|p| p.session != token);
        self.active.retain(|a| a.session != token);
        let dropped = before - self.pending.len() - self.active.len();

        if dropped > 0 {
            info!("🔔 Dropped {} reminder(s) for closed session", dropped);
        }
    }

    /// Queue a reminder for `now + delay`. Returns false if the session is closed.
    pub fn schedule(&mut self, session: SessionToken, reminder: Reminder, now: Instant) -> bool {
        if !self.live_sessions.contains(&session) {
            debug!("🔔 Ignoring reminder for closed session");
            return false;
        }

        info!("🔔 Reminder for '{}' scheduled in {:?}", reminder.event_name, self.config.delay());
        self.pending.push(PendingReminder {
            session,
            due: now + self.config.delay(),
            reminder,
        });
        true
    }

    /// Show due reminders and discard finished ones. Returns how many fired.
    pub fn poll(&mut self, now: Instant) -> usize {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due <= now);
        self.pending = waiting;

        let fired = due.len();
        for pending in due {
            info!("🔔 Showing reminder for '{}'", pending.reminder.event_name);
            self.active.push(ActiveReminder {
                reminder: pending.reminder,
                session: pending.session,
                shown_at: now,
                fade: self.config.fade(),
                hold: self.config.hold(),
            });
        }

        self.active.retain(|a| a.phase(now) != ReminderPhase::Finished);
        fired
    }

    /// Reminders on screen, oldest first
    pub fn active(&self) -> &[ActiveReminder] {
        &self.active
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// How long the UI may wait before it must poll again
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let fade_step = Duration::from_millis(self.config.fade_step_ms.max(1));

        let animating = self.active.iter().map(|active| match active.phase(now) {
            // Fully opaque until the fade-out starts
            ReminderPhase::Visible => (active.shown_at + active.hold).saturating_duration_since(now),
            _ => fade_step,
        });

        self.pending
            .iter()
            .map(|p| p.due.saturating_duration_since(now))
            .chain(animating)
            .min()
    }

    /// Vertical offset for a popup at the given opacity
    pub fn slide_offset(&self, alpha: f32) -> f32 {
        (1.0 - alpha.clamp(0.0, 1.0)) * self.config.slide_px
    }
}
