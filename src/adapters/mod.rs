pub mod config_file_filesystem;
pub mod platform_command;

pub use config_file_filesystem::FilesystemConfigFile;
pub use platform_command::CommandPlatform;
