use super::alert::AlertDialogState;
use super::context::AppContext;
use super::toast::ToastManager;
use super::CalendarApp;
use crate::models::event::EventMap;
use crate::models::settings::AppTitle;
use crate::models::todo::TodoList;
use crate::models::view_state::ViewState;
use crate::services::database::Database;
use crate::services::settings::TitleService;
use crate::services::storage::{KeyValueStore, MemoryStore};
use crate::ui_egui::event_dialog::EventDialog;
use anyhow::{Context, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;
use std::path::PathBuf;

impl CalendarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (store, persistent) = initialize_store();
        let context = AppContext::new(store, persistent);
        let title = load_title_or_default(&context.title_service());

        let mut app = Self {
            context,
            view: ViewState::today(),
            title,
            title_editor: None,
            events: EventMap::new(),
            todos: TodoList::new(),
            todo_input: String::new(),
            event_dialog: EventDialog::new(),
            alert_dialog: AlertDialogState::new(),
            toast_manager: ToastManager::new(),
        };

        app.reload();
        if !app.context.is_persistent() {
            app.toast_manager
                .warning("Storage unavailable: changes will not be saved");
        }
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        self.render_header(ctx);

        // Sidebar before CentralPanel so it takes the right-hand space
        self.render_todo_sidebar(ctx);
        self.render_main_panel(ctx);

        self.handle_event_dialog(ctx);
        self.alert_dialog.render(ctx);

        // Toasts last, so they appear on top
        let is_dark = ctx.style().visuals.dark_mode;
        self.toast_manager.render(ctx, is_dark);
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.event_dialog.is_open() || self.alert_dialog.is_open() || ctx.wants_keyboard_input()
        {
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.navigate_previous();
            } else if i.key_pressed(egui::Key::ArrowRight) {
                self.navigate_next();
            } else if i.key_pressed(egui::Key::T) {
                self.jump_to_today();
            }
        });
    }
}

/// Resolve where the database file lives.
///
/// Debug builds keep it in the working directory; release builds use the
/// platform data directory.
fn resolve_database_path() -> Result<PathBuf> {
    #[cfg(debug_assertions)]
    let path = PathBuf::from("calendar.db");

    #[cfg(not(debug_assertions))]
    let path = {
        if let Some(proj_dirs) = ProjectDirs::from("com", "PersonalCalendar", "PersonalCalendar") {
            let data_dir = proj_dirs.data_dir();
            std::fs::create_dir_all(data_dir)
                .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;
            data_dir.join("calendar.db")
        } else {
            PathBuf::from("calendar.db")
        }
    };

    Ok(path)
}

fn open_database() -> Result<Database> {
    let path = resolve_database_path()?;
    let db = Database::new(&path.to_string_lossy())?;
    db.initialize_schema()
        .context("Failed to initialize database schema")?;
    log::info!("Using database at {:?}", path);
    Ok(db)
}

/// Open the SQLite store, falling back to an in-memory store when it is
/// unavailable. The flag is `false` for the fallback.
fn initialize_store() -> (Box<dyn KeyValueStore>, bool) {
    match open_database() {
        Ok(db) => (Box::new(db), true),
        Err(e) => {
            log::warn!("Failed to open database: {:#}, using in-memory storage", e);
            (Box::new(MemoryStore::new()), false)
        }
    }
}

fn load_title_or_default(title_service: &TitleService) -> AppTitle {
    match title_service.get() {
        Ok(title) => title,
        Err(e) => {
            log::warn!("Failed to load title: {:#}, using default", e);
            AppTitle::default()
        }
    }
}
