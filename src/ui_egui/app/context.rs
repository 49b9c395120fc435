use crate::services::event::EventService;
use crate::services::ids::RandomIdGenerator;
use crate::services::settings::TitleService;
use crate::services::storage::KeyValueStore;
use crate::services::todo::TodoService;

/// Shared access point for services that multiple app modules need.
pub struct AppContext {
    store: Box<dyn KeyValueStore>,
    ids: RandomIdGenerator,
    /// False when running on the in-memory fallback store
    persistent: bool,
}

impl AppContext {
    pub fn new(store: Box<dyn KeyValueStore>, persistent: bool) -> Self {
        Self {
            store,
            ids: RandomIdGenerator,
            persistent,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn event_service(&self) -> EventService<'_> {
        EventService::new(self.store.as_ref(), &self.ids)
    }

    pub fn todo_service(&self) -> TodoService<'_> {
        TodoService::new(self.store.as_ref(), &self.ids)
    }

    pub fn title_service(&self) -> TitleService<'_> {
        TitleService::new(self.store.as_ref())
    }
}
