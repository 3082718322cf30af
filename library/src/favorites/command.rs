pub mod list_favorites_cmd;
pub mod remove_favorite_cmd;
pub mod toggle_favorite_cmd;
