//! Subcommand implementations. Each returns data; printing is separate.

pub mod duplicates;
pub mod import;
pub mod init;
pub mod template;

pub use duplicates::{find_in_deck, print_groups};
pub use import::{import_file, print_report, ImportReport};
pub use init::init_collection;
pub use template::write_template;
