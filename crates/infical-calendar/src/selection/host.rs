//! Host callbacks for selection clicks and deferred view switches.

use std::collections::VecDeque;

use serde::Serialize;

use crate::date::DateKey;
use crate::policy::DayPolicy;

/// Where a selection click came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectSource {
    Day,
    Month,
    Year,
}

/// Asks the host to scroll its day list to `date`. The host may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub date: DateKey,
}

/// Work deferred to the next animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrameTask {
    /// Switch back to the day view.
    ShowDays,
}

/// ## Summary
/// Callbacks the calendar core invokes on its host.
///
/// `on_select` always runs synchronously inside the click, before anything
/// passed to `request_animation_frame`.
pub trait CalendarHost {
    fn on_select(&mut self, date: DateKey, source: SelectSource, scroll: Option<ScrollRequest>);

    /// Fire-and-forget; a task whose view is gone must be dropped by the host.
    fn request_animation_frame(&mut self, task: FrameTask);
}

/// Result of a click on a day, month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickOutcome {
    Selected(DateKey),
    /// The target was disabled; nothing happened.
    Ignored,
}

/// ## Summary
/// Routes clicks to the host and schedules the hide-on-select view switch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionController {
    hide_on_select: bool,
}

impl SelectionController {
    #[must_use]
    pub const fn new(hide_on_select: bool) -> Self {
        Self { hide_on_select }
    }

    #[must_use]
    pub const fn hide_on_select(&self) -> bool {
        self.hide_on_select
    }

    /// ## Summary
    /// Reports a selection that the caller has already found selectable.
    ///
    /// Month and year clicks carry a scroll request; day clicks do not since
    /// the day is already on screen.
    pub fn select<H: CalendarHost + ?Sized>(
        &self,
        host: &mut H,
        date: DateKey,
        source: SelectSource,
    ) -> ClickOutcome {
        let scroll = match source {
            SelectSource::Day => None,
            SelectSource::Month | SelectSource::Year => Some(ScrollRequest { date }),
        };
        tracing::debug!(%date, ?source, "Selection changed");
        host.on_select(date, source, scroll);

        if self.hide_on_select && source != SelectSource::Day {
            host.request_animation_frame(FrameTask::ShowDays);
        }
        ClickOutcome::Selected(date)
    }

    /// ## Summary
    /// Handles a click on a day cell, ignoring disabled days.
    pub fn select_day<H: CalendarHost + ?Sized>(
        &self,
        host: &mut H,
        policy: &DayPolicy<'_>,
        date: DateKey,
    ) -> ClickOutcome {
        if policy.is_disabled(date) {
            tracing::debug!(%date, "Ignored click on disabled day");
            return ClickOutcome::Ignored;
        }
        self.select(host, date, SelectSource::Day)
    }
}

/// ## Summary
/// Minimal frame queue a host can embed to honour `request_animation_frame`.
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
    pending: VecDeque<FrameTask>,
}

impl FrameQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: FrameTask) {
        self.pending.push_back(task);
    }

    /// Takes every task queued before this frame.
    pub fn run_frame(&mut self) -> Vec<FrameTask> {
        self.pending.drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
