pub mod launch;
pub mod status;
