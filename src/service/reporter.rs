use super::{GamificationApi, NotificationPresenter};
use crate::error::GamificationError;
use crate::model::{ActivityEvent, ActivityResult, ActivityType, Notification};

/// Sends activities to the backend and turns the rewards into toasts.
pub struct ActivityReporter<A, P> {
    api: A,
    presenter: P,
    authenticated: bool,
}

impl<A, P> ActivityReporter<A, P>
where
    A: GamificationApi,
    P: NotificationPresenter,
{
    pub fn new(api: A, presenter: P, authenticated: bool) -> Self {
        ActivityReporter {
            api,
            presenter,
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Records the activity and shows its toasts. Failures are logged and
    /// yield `None`; nothing is retried.
    pub async fn record_activity(
        &self,
        activity_type: ActivityType,
        description: impl Into<String>,
    ) -> Option<ActivityResult> {
        if !self.authenticated {
            log::debug!("Skipping {} activity on anonymous page", activity_type);
            return None;
        }

        match self.try_record(ActivityEvent::new(activity_type, description)).await {
            Ok(result) => Some(result),
            Err(GamificationError::Rejected(message)) => {
                log::debug!(
                    "Activity {} not recorded: {}",
                    activity_type,
                    message.as_deref().unwrap_or("no message")
                );
                None
            }
            Err(err) => {
                log::error!("Error recording activity: {}", err);
                None
            }
        }
    }

    /// Like [`record_activity`](Self::record_activity), then hands the result
    /// to `callback`. The callback only runs for successful results.
    pub async fn record_activity_with<F>(
        &self,
        activity_type: ActivityType,
        description: impl Into<String>,
        callback: F,
    ) -> Option<ActivityResult>
    where
        F: FnOnce(&ActivityResult),
    {
        let result = self.record_activity(activity_type, description).await?;
        callback(&result);
        Some(result)
    }

    async fn try_record(&self, event: ActivityEvent) -> Result<ActivityResult, GamificationError> {
        let result = self.api.record_activity(&event).await?;
        if !result.success {
            return Err(GamificationError::Rejected(result.message));
        }

        log::info!(
            "Recorded activity: {}, earned {} points",
            event.activity_type,
            result.points_earned
        );
        for notification in Notification::for_activity(event.activity_type, &result) {
            self.presenter.present(&notification);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Achievement;
    use crate::service::testing::{MockApi, RecordingPresenter};
    use futures::executor::block_on;
    use std::cell::Cell;

    fn rewarded() -> ActivityResult {
        ActivityResult {
            success: true,
            points_earned: 20,
            level_up: true,
            new_level: Some(2),
            new_achievements: vec![
                Achievement::new("Researcher", "Ten searches", 30),
                Achievement::new("Night Owl", "Worked past midnight", 10),
            ],
            message: None,
        }
    }

    #[test]
    fn presents_points_level_and_achievements_in_order() {
        let reporter =
            ActivityReporter::new(MockApi::with_activity(Ok(rewarded())), RecordingPresenter::default(), true);

        let result = block_on(reporter.record_activity(ActivityType::Research, "Searched rulings"));

        assert_eq!(result, Some(rewarded()));
        let shown = reporter.presenter().shown.borrow();
        assert_eq!(shown.len(), 4);
        assert_eq!(
            shown[0],
            Notification::Points {
                points: 20,
                activity_type: ActivityType::Research
            }
        );
        assert_eq!(shown[1], Notification::LevelUp { level: Some(2) });
        assert!(matches!(&shown[2], Notification::Achievement(a) if a.name == "Researcher"));
        assert!(matches!(&shown[3], Notification::Achievement(a) if a.name == "Night Owl"));
    }

    #[test]
    fn sends_the_event_once() {
        let reporter =
            ActivityReporter::new(MockApi::with_activity(Ok(rewarded())), RecordingPresenter::default(), true);

        block_on(reporter.record_activity(ActivityType::CreateCase, "Opened a case"));

        let recorded = reporter.api.recorded.borrow();
        assert_eq!(
            *recorded,
            vec![ActivityEvent::new(ActivityType::CreateCase, "Opened a case")]
        );
    }

    #[test]
    fn anonymous_page_never_sends_login() {
        let reporter =
            ActivityReporter::new(MockApi::with_activity(Ok(rewarded())), RecordingPresenter::default(), false);

        let result = block_on(reporter.record_activity(ActivityType::Login, "User logged in"));

        assert_eq!(result, None);
        assert!(reporter.api.recorded.borrow().is_empty());
        assert!(reporter.presenter().shown.borrow().is_empty());
    }

    #[test]
    fn callback_runs_with_successful_result() {
        let reporter =
            ActivityReporter::new(MockApi::with_activity(Ok(rewarded())), RecordingPresenter::default(), true);
        let seen = Cell::new(0);

        block_on(reporter.record_activity_with(ActivityType::Login, "User logged in", |result| {
            seen.set(result.points_earned)
        }));

        assert_eq!(seen.get(), 20);
    }

    #[test]
    fn rejected_response_skips_toasts_and_callback() {
        let rejected = ActivityResult {
            success: false,
            points_earned: 5,
            message: Some("Invalid activity type".to_string()),
            ..Default::default()
        };
        let reporter =
            ActivityReporter::new(MockApi::with_activity(Ok(rejected)), RecordingPresenter::default(), true);
        let called = Cell::new(false);

        let result = block_on(reporter.record_activity_with(ActivityType::Login, "x", |_| {
            called.set(true)
        }));

        assert_eq!(result, None);
        assert!(!called.get());
        assert!(reporter.presenter().shown.borrow().is_empty());
    }

    #[test]
    fn network_failure_is_swallowed() {
        let reporter = ActivityReporter::new(
            MockApi::with_activity(Err(GamificationError::Network("offline".to_string()))),
            RecordingPresenter::default(),
            true,
        );

        let result = block_on(reporter.record_activity(ActivityType::Research, "x"));

        assert_eq!(result, None);
        assert!(reporter.presenter().shown.borrow().is_empty());
    }

    #[test]
    fn zero_points_shows_no_points_toast() {
        let quiet = ActivityResult {
            success: true,
            ..Default::default()
        };
        let reporter =
            ActivityReporter::new(MockApi::with_activity(Ok(quiet)), RecordingPresenter::default(), true);

        assert!(block_on(reporter.record_activity(ActivityType::UpdateCase, "x")).is_some());
        assert!(reporter.presenter().shown.borrow().is_empty());
    }
}
