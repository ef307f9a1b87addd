//! CLI command handlers. Each command is in its own file.

mod completions;
mod meetings;
mod pack;
mod packet_args;
mod preview;
mod suggest;
mod title;

pub use completions::run_completions;
pub use meetings::run_meetings;
pub use pack::run_pack;
pub use packet_args::PacketArgs;
pub use preview::run_preview;
pub use suggest::run_suggest_keyword;
pub use title::run_title;
