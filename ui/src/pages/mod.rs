pub mod room_search;

pub use room_search::RoomSearchPage;
