mod magazines_service_config;

pub use magazines_service_config::*;
