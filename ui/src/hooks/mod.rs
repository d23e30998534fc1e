pub mod use_available_rooms;

pub use use_available_rooms::{AvailableRoomsHook, use_available_rooms};
