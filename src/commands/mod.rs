//! Command handlers for the packignore binary

pub mod edit;
pub mod list;
pub mod show;
pub mod status;
pub mod workspace;

pub use edit::cmd_edit;
pub use list::cmd_list;
pub use show::cmd_show;
pub use status::cmd_status;
