pub mod cargo;
pub mod git;
pub mod process;

pub use cargo::doc_output_dir;
pub use git::get_remote_url;
pub use process::{CommandRunner, SystemRunner};
