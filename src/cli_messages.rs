//! Console feedback for the one-shot subcommands
//!
//! `set-api`, `reset`, and endpoint resolution report through these macros so
//! their output stays consistent. The dashboard itself never prints here.

const INFO_TAG: &str = "\x1b[1;33m[INFO]\x1b[0m";
const WARN_TAG: &str = "\x1b[1;91m[WARN]\x1b[0m";
const ERROR_TAG: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const SUCCESS_TAG: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

/// `<tag> <title>`, followed by a tab and the details when there are any.
fn tagged_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn format_info(title: &str, details: &str) -> String {
    tagged_line(INFO_TAG, title, details)
}

pub fn format_warn(title: &str, details: &str) -> String {
    tagged_line(WARN_TAG, title, details)
}

/// Errors put the details on a line of their own.
pub fn format_error(title: &str, details: &str) -> String {
    format!("{} {}\n{} Details: {}", ERROR_TAG, title, ERROR_TAG, details)
}

pub fn format_success(title: &str, details: &str) -> String {
    tagged_line(SUCCESS_TAG, title, details)
}

/// Progress of a subcommand, e.g. which config file `reset` clears.
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        println!("{}", $crate::cli_messages::format_info($title, &format!($($details)*)))
    };
}

/// A source of the API URL was unusable and is being skipped.
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        println!("{}", $crate::cli_messages::format_warn($title, &format!($($details)*)))
    };
}

/// A subcommand failed; `$details` is the reason.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr, $details:expr) => {
        println!("{}", $crate::cli_messages::format_error($title, $details))
    };
}

/// A subcommand completed and changed something on disk.
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        println!("{}", $crate::cli_messages::format_success($title, &format!($($details)*)))
    };
}
