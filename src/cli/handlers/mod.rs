mod bug;
mod check;
mod lists;
mod report;
mod utils;
mod verify;

pub use bug::handle_bug;
pub use check::handle_check;
pub use lists::handle_lists;
pub use report::handle_report;
pub use verify::handle_verify;

use crate::config::Settings;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub settings: Settings,
}

impl CommandContext {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}
