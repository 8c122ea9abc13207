mod config_file;
mod platform;

pub use config_file::ConfigFile;
pub use platform::Platform;
