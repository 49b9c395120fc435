mod alert;
mod context;
mod dialogs;
mod header;
mod lifecycle;
mod navigation;
mod sidebar;
mod toast;
mod transfer;

use self::alert::AlertDialogState;
use self::context::AppContext;
use self::header::TitleEditor;
use self::toast::ToastManager;
use crate::models::event::EventMap;
use crate::models::settings::AppTitle;
use crate::models::todo::TodoList;
use crate::models::view_state::ViewState;
use crate::ui_egui::event_dialog::EventDialog;

const SIDEBAR_DEFAULT_WIDTH: f32 = 240.0;

pub struct CalendarApp {
    /// Storage backend and id generator shared by every service
    context: AppContext,
    /// Month currently shown in the grid
    view: ViewState,
    title: AppTitle,
    title_editor: Option<TitleEditor>,
    /// Snapshot of the stored events, refreshed after every mutation
    events: EventMap,
    todos: TodoList,
    todo_input: String,
    event_dialog: EventDialog,
    /// Blocking alert for errors that need acknowledgement
    alert_dialog: AlertDialogState,
    toast_manager: ToastManager,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl CalendarApp {
    /// Re-read events and to-dos from the store.
    fn reload(&mut self) {
        self.events = match self.context.event_service().load() {
            Ok(events) => events,
            Err(e) => {
                log::error!("Failed to load events: {:#}", e);
                self.toast_manager.error("Failed to load events");
                EventMap::new()
            }
        };

        self.todos = match self.context.todo_service().load() {
            Ok(todos) => todos,
            Err(e) => {
                log::error!("Failed to load to-dos: {:#}", e);
                self.toast_manager.error("Failed to load to-do list");
                TodoList::new()
            }
        };
    }
}
