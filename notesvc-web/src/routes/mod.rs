mod index;
mod notes;

pub use index::config as index_config;
pub use notes::config as notes_config;
pub use notes::HELP_MESSAGE;
