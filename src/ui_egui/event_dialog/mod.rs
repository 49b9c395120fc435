// Event dialog: egui-free state machine plus its window renderer

mod render;
pub mod state;

pub use render::{render_event_dialog, DialogAction};
pub use state::{random_preset_color, DialogOutcome, EventDialog, EventDialogState, EventFields};
