// Service module exports

pub mod database;
pub mod event;
pub mod ids;
pub mod settings;
pub mod storage;
pub mod todo;
