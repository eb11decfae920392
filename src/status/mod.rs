//! The polling boundary around `tmutil`: snapshot model, output parsing,
//! display formatting, and the poller that drives the 5-second cycle.

pub mod format;
pub mod parser;
pub mod poller;
pub mod snapshot;

pub use format::{files_line, formatted_percentage, gigabytes, minutes_remaining};
pub use parser::parse_status;
pub use poller::StatusPoller;
pub use snapshot::BackupSnapshot;
