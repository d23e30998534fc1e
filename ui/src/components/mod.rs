pub mod availability_board;
pub mod edit_booking_modal;
pub mod modal;
pub mod notifications;

pub use availability_board::AvailabilityBoard;
pub use edit_booking_modal::EditBookingModal;
pub use modal::Modal;
pub use notifications::NotificationContainer;
