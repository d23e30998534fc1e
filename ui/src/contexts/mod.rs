pub mod api;
pub mod notifications;
