use crate::model::{level_message, points_message, Notification};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub notification: Notification,
    pub on_close: Callback<()>,
}

/// Header and body of one toast. The `.toast` wrapper itself belongs to the
/// toast service so it can be removed without going through Yew.
#[function_component(ToastComp)]
pub fn toast_comp(props: &ToastProps) -> Html {
    let notification = &props.notification;

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let close_class = if notification.light_close_button() {
        "btn-close btn-close-white"
    } else {
        "btn-close"
    };

    let icon = match notification {
        Notification::Achievement(achievement) if achievement.icon_image().is_some() => html! {
            <img class="me-2" width="20" height="20" alt=""
                src={achievement.icon_image().unwrap_or_default().to_string()} />
        },
        _ => html! { <i class={format!("{} me-2", notification.icon_class())}></i> },
    };

    let body = match notification {
        Notification::Points {
            points,
            activity_type,
        } => html! {
            <p class="mb-0">{points_message(*points, *activity_type)}</p>
        },
        Notification::LevelUp { level } => html! {
            <>
                <h5 class="mb-1">{"Congratulations!"}</h5>
                <p class="mb-0">{level_message(*level)}</p>
            </>
        },
        Notification::Achievement(achievement) => html! {
            <>
                <h5 class="mb-1">{achievement.name.clone()}</h5>
                <p class="mb-1">{achievement.description.clone()}</p>
                <span class="badge bg-warning text-dark">{format!("+{} Points", achievement.points)}</span>
            </>
        },
    };

    html! {
        <>
            <div class={format!("toast-header {}", notification.header_class())}>
                {icon}
                <strong class="me-auto">{notification.title()}</strong>
                <button type="button" class={close_class} aria-label="Close" onclick={on_close}></button>
            </div>
            <div class="toast-body">
                {body}
            </div>
        </>
    }
}
