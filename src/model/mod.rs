pub mod api;
pub mod discord;
pub mod identity;
pub mod role;
