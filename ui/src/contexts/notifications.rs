use std::collections::HashMap;
use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Error,
    Success,
    #[allow(dead_code)]
    Info,
}

/// A transient user-visible notification. Fire-and-forget: emitting
/// one never affects control flow in the component that raised it.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    /// Auto-dismiss delay in milliseconds; `None` keeps it on screen
    /// until dismissed by hand.
    pub duration: Option<u32>,
}

impl Notification {
    pub fn new(message: String, kind: NotificationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            kind,
            duration: Some(5000),
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, NotificationKind::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    pub notifications: HashMap<Uuid, Notification>,
}

pub enum NotificationAction {
    Add(Notification),
    Remove(Uuid),
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut notifications = self.notifications.clone();

        match action {
            NotificationAction::Add(notification) => {
                notifications.insert(notification.id, notification);
            }
            NotificationAction::Remove(id) => {
                notifications.remove(&id);
            }
        }

        Rc::new(NotificationState { notifications })
    }
}

pub type NotificationContext = UseReducerHandle<NotificationState>;

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component]
pub fn NotificationProvider(props: &NotificationProviderProps) -> Html {
    let state = use_reducer(NotificationState::default);

    html! {
        <ContextProvider<NotificationContext> context={state}>
            {props.children.clone()}
        </ContextProvider<NotificationContext>>
    }
}

#[derive(Clone)]
pub struct NotificationHandle {
    context: NotificationContext,
}

impl NotificationHandle {
    pub fn new(context: NotificationContext) -> Self {
        Self { context }
    }

    pub fn add(&self, notification: Notification) {
        let id = notification.id;
        let duration = notification.duration;
        let context = self.context.clone();

        self.context.dispatch(NotificationAction::Add(notification));

        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(NotificationAction::Remove(id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Notification::error(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Notification::success(message.into()));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(NotificationAction::Remove(id));
    }
}

#[hook]
pub fn use_notifications() -> NotificationHandle {
    let context = use_context::<NotificationContext>()
        .expect("use_notifications must be used within a NotificationProvider");
    NotificationHandle::new(context)
}
