mod dump;
mod report;

pub use dump::{DEFAULT_MAX_DEPTH, DumpOptions, INDENT_WIDTH, MemberDumper, UNKNOWN_TYPE_NAME};
pub use report::ReportFormatter;
