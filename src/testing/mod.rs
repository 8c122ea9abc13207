mod fake_platform;
mod memory_config_file;

pub use fake_platform::FakePlatform;
pub use memory_config_file::MemoryConfigFile;
