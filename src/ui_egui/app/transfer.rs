use super::CalendarApp;
use crate::services::event::{ImportError, EXPORT_FILE_NAME};

/// Export and import of the event document through native file dialogs.
impl CalendarApp {
    pub(super) fn export_events(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Export Events")
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        match self.context.event_service().export_to_file(&path) {
            Ok(()) => self.toast_manager.success("Events exported"),
            Err(e) => {
                log::error!("Failed to export events: {:#}", e);
                self.toast_manager.error("Failed to export events");
            }
        }
    }

    pub(super) fn import_events(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Import Events")
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        match self.context.event_service().import_from_file(&path) {
            Ok(()) => {
                self.reload();
                self.jump_to_today();
                self.toast_manager.success("Events imported");
            }
            Err(e) => {
                if let Some(import_error) = e.downcast_ref::<ImportError>() {
                    log::warn!("Rejected import file {:?}: {}", path, import_error);
                    self.alert_dialog.show("Import failed", "Invalid JSON file.");
                } else {
                    log::error!("Failed to import events: {:#}", e);
                    self.toast_manager.error("Failed to import events");
                }
            }
        }
    }
}
