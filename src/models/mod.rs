// Module exports for models

pub mod date_key;
pub mod event;
pub mod settings;
pub mod todo;
pub mod view_state;
