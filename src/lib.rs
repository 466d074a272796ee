pub mod cli;
pub mod error;
pub mod loader;
pub mod output;
pub mod resolver;
pub mod scan;
pub mod types;

pub use cli::{Cli, parse_size};
pub use error::{Error, Result};
pub use loader::{DatabaseFile, TypeDatabase};
pub use output::{DEFAULT_MAX_DEPTH, DumpOptions, MemberDumper, ReportFormatter};
pub use resolver::TypeResolver;
pub use scan::{SizeMatch, find_by_size};
pub use types::{BaseRef, Member, TagSet, TypeId, TypeKind, TypeRecord};
