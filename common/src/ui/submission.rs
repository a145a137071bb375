//! Submit cycle of a single conversion form.

use crate::model::conversion::{ConversionOutcome, SubmissionFailure};

/// Submit button text while a conversion request is in flight.
pub const PROCESSING_LABEL: &str = "Processing...";

/// In-flight flag and pending failure alert of one form.
///
/// The alert is held until the caller has re-rendered the restored button,
/// then taken with [`SubmitState::take_alert`].
#[derive(Clone, Debug, Default)]
pub struct SubmitState {
    in_flight: bool,
    alert: Option<String>,
}

impl SubmitState {
    /// Marks a request as in flight. False when one already is, in which
    /// case the new submission must be ignored.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Ends the current request on every path and returns the outcome to
    /// render, if it succeeded. A failure is queued as an alert.
    pub fn finish(
        &mut self,
        result: Result<ConversionOutcome, SubmissionFailure>,
    ) -> Option<ConversionOutcome> {
        self.in_flight = false;
        match result {
            Ok(outcome) => Some(outcome),
            Err(failure) => {
                self.alert = Some(failure.alert_message());
                None
            }
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Text of the submit button.
    pub fn button_label<'a>(&self, idle: &'a str) -> &'a str {
        if self.in_flight { PROCESSING_LABEL } else { idle }
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_is_ignored_while_in_flight() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_in_flight());
        assert_eq!(state.button_label("Convert to List"), PROCESSING_LABEL);
    }

    #[test]
    fn success_restores_button() {
        let mut state = SubmitState::default();
        state.begin();

        let outcome = state.finish(Ok(ConversionOutcome::Display { text: "a".to_string() }));
        assert_eq!(outcome, Some(ConversionOutcome::Display { text: "a".to_string() }));
        assert!(!state.is_in_flight());
        assert_eq!(state.button_label("Convert to List"), "Convert to List");
        assert_eq!(state.take_alert(), None);
    }

    #[test]
    fn rejection_restores_button_before_alerting() {
        let mut state = SubmitState::default();
        state.begin();

        let failure = SubmissionFailure::Rejected {
            status: 400,
            message: Some("A column must be selected".to_string()),
        };
        assert_eq!(state.finish(Err(failure)), None);
        assert!(!state.is_in_flight());
        assert_eq!(state.button_label("Convert"), "Convert");
        assert_eq!(state.take_alert().as_deref(), Some("Error: A column must be selected"));
        assert_eq!(state.take_alert(), None);
    }

    #[test]
    fn transport_failure_restores_button() {
        let mut state = SubmitState::default();
        state.begin();

        state.finish(Err(SubmissionFailure::Transport("offline".to_string())));
        assert!(state.begin(), "button usable again after a network error");
        assert_eq!(
            state.take_alert().as_deref(),
            Some("An error occurred while submitting the form. Please check the console.")
        );
    }
}
