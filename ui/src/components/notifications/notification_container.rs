use yew::prelude::*;

use super::NotificationItem;
use crate::contexts::notifications::NotificationContext;

#[function_component]
pub fn NotificationContainer() -> Html {
    let context = use_context::<NotificationContext>();

    let notifications = match context {
        Some(context) => {
            // Arbitrary but stable ordering so items don't jump around
            // between renders.
            let mut notifications: Vec<_> =
                context.notifications.values().cloned().collect();
            notifications.sort_by_key(|n| n.id.to_string());
            notifications
        }
        None => vec![],
    };

    if notifications.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for notifications.iter().map(|notification| {
                html! {
                    <NotificationItem
                        key={notification.id.to_string()}
                        notification={notification.clone()}
                    />
                }
            })}
        </div>
    }
}
