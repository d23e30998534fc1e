pub mod notification_container;
pub mod notification_item;

pub use notification_container::NotificationContainer;
pub use notification_item::NotificationItem;
