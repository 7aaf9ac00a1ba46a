use crate::model::{Achievement, ActivityType, Notification};
use std::rc::Rc;

pub trait NotificationPresenter {
    fn show_points_notification(&self, points: u32, activity_type: ActivityType);

    fn show_level_up_notification(&self, level: Option<u32>);

    fn show_achievement_notification(&self, achievement: &Achievement);

    fn present(&self, notification: &Notification) {
        match notification {
            Notification::Points {
                points,
                activity_type,
            } => self.show_points_notification(*points, *activity_type),
            Notification::LevelUp { level } => self.show_level_up_notification(*level),
            Notification::Achievement(achievement) => {
                self.show_achievement_notification(achievement)
            }
        }
    }
}

impl<T> NotificationPresenter for Rc<T>
where
    T: NotificationPresenter + ?Sized,
{
    fn show_points_notification(&self, points: u32, activity_type: ActivityType) {
        (**self).show_points_notification(points, activity_type)
    }

    fn show_level_up_notification(&self, level: Option<u32>) {
        (**self).show_level_up_notification(level)
    }

    fn show_achievement_notification(&self, achievement: &Achievement) {
        (**self).show_achievement_notification(achievement)
    }
}
