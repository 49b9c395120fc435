use crate::models::settings::AppTitle;
use crate::services::storage::{KeyValueStore, TITLE_KEY};
use anyhow::{Context, Result};

pub struct TitleService<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> TitleService<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Get the current title, or the default when none was saved
    pub fn get(&self) -> Result<AppTitle> {
        let stored = self
            .store
            .get(TITLE_KEY)
            .context("Failed to load app title")?;
        Ok(AppTitle::from_stored(stored))
    }

    /// Save a title entered by the user. Blank input stores the default.
    pub fn set(&self, input: &str) -> Result<AppTitle> {
        let title = AppTitle::from_input(input);
        self.store
            .set(TITLE_KEY, title.as_str())
            .context("Failed to save app title")?;
        log::info!("App title set to '{}'", title.as_str());
        Ok(title)
    }
}
