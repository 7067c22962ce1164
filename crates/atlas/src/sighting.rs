//! Wildlife sighting report form.
//!
//! Submissions are not sent anywhere: they are appended to [`SightingLog`],
//! logged as JSON, and acknowledged in the form. The form then closes itself
//! after [`FORM_AUTO_CLOSE_SECS`].

use std::time::Duration;

use bevy::prelude::*;
use serde::Serialize;

use crate::config::FORM_AUTO_CLOSE_SECS;

/// Values typed into the form. No field is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SightingFields {
    pub species: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub email: String,
}

/// Every report submitted this session, oldest first.
#[derive(Resource, Debug, Default)]
pub struct SightingLog {
    pub reports: Vec<SightingFields>,
}

/// Acknowledgement shown in place of the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub heading: &'static str,
    pub body: String,
}

impl FormMessage {
    pub fn thank_you(fields: &SightingFields) -> Self {
        Self {
            heading: "✅ Thank you for your sighting report!",
            body: format!(
                "Your observation of {} in {} has been recorded. While this is a demo app \
                 with no backend, in a real system this would be sent to wildlife \
                 conservation experts for verification.",
                fields.species, fields.location
            ),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct SightingForm {
    pub open: bool,
    pub fields: SightingFields,
    pub message: Option<FormMessage>,
    /// One timer per submission. Each one closes the form when it fires,
    /// whether or not the form was closed and reopened in between.
    pending_closes: Vec<Timer>,
}

impl SightingForm {
    /// Shows the form with any previous acknowledgement cleared.
    pub fn open(&mut self) {
        self.open = true;
        self.message = None;
    }

    /// Hides the form and resets its fields. Safe to call when already closed.
    pub fn close(&mut self) {
        self.open = false;
        self.fields = SightingFields::default();
        self.message = None;
    }

    /// Records the current fields and schedules the form to close.
    pub fn submit(&mut self, log: &mut SightingLog) {
        let report = self.fields.clone();
        match serde_json::to_string(&report) {
            Ok(json) => info!("Sighting report submitted: {json}"),
            Err(e) => warn!("Sighting report could not be serialized: {e}"),
        }
        self.message = Some(FormMessage::thank_you(&report));
        log.reports.push(report);
        self.pending_closes
            .push(Timer::from_seconds(FORM_AUTO_CLOSE_SECS, TimerMode::Once));
    }

    /// Advances pending close timers; closes the form if any of them fired.
    pub fn tick(&mut self, delta: Duration) {
        let before = self.pending_closes.len();
        self.pending_closes.retain_mut(|timer| !timer.tick(delta).finished());
        if self.pending_closes.len() < before {
            self.close();
        }
    }

    pub fn has_pending_close(&self) -> bool {
        !self.pending_closes.is_empty()
    }
}

pub fn tick_sighting_form(time: Res<Time>, mut form: ResMut<SightingForm>) {
    if form.has_pending_close() {
        form.tick(time.delta());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SightingForm {
        let mut form = SightingForm::default();
        form.open();
        form.fields = SightingFields {
            species: "Red Kite".into(),
            location: "Wicklow".into(),
            date: "2024-05-01".into(),
            description: "Circling over the valley".into(),
            email: String::new(),
        };
        form
    }

    #[test]
    fn submit_records_and_acknowledges() {
        let mut form = filled();
        let mut log = SightingLog::default();
        form.submit(&mut log);

        assert_eq!(log.reports.len(), 1);
        assert_eq!(log.reports[0].species, "Red Kite");
        let message = form.message.clone().unwrap_or_else(|| panic!("no message"));
        assert!(message.body.contains("Red Kite"));
        assert!(message.body.contains("Wicklow"));
        assert!(form.open);
        assert!(form.has_pending_close());
    }

    #[test]
    fn form_closes_after_the_delay() {
        let mut form = filled();
        let mut log = SightingLog::default();
        form.submit(&mut log);

        form.tick(Duration::from_secs_f32(2.9));
        assert!(form.open);
        form.tick(Duration::from_secs_f32(0.2));
        assert!(!form.open);
        assert_eq!(form.fields, SightingFields::default());
        assert!(form.message.is_none());
        assert!(!form.has_pending_close());
    }

    #[test]
    fn pending_close_fires_even_after_manual_close_and_reopen() {
        let mut form = filled();
        let mut log = SightingLog::default();
        form.submit(&mut log);
        form.close();
        form.open();
        form.fields.species = "Otter".into();

        form.tick(Duration::from_secs(3));
        assert!(!form.open);
        assert!(form.fields.species.is_empty());
    }

    #[test]
    fn close_is_idempotent() {
        let mut form = filled();
        form.close();
        form.close();
        assert!(!form.open);
        assert_eq!(form.fields, SightingFields::default());
    }

    #[test]
    fn empty_submission_is_accepted() {
        let mut form = SightingForm::default();
        form.open();
        let mut log = SightingLog::default();
        form.submit(&mut log);
        assert_eq!(log.reports.len(), 1);
        assert!(form.message.is_some());
    }

    #[test]
    fn reopening_clears_the_previous_message() {
        let mut form = filled();
        let mut log = SightingLog::default();
        form.submit(&mut log);
        form.open();
        assert!(form.message.is_none());
    }
}
