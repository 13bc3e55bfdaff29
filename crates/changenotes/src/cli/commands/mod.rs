//! CLI commands

mod check;
mod generate;
mod init;
mod list;

pub use check::CheckCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use list::ListCommand;
