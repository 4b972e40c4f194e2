use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    /// Used when request does not specify page size
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("MAGAZINE_ADMIN_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("MAGAZINE_ADMIN_LOG_FILENAME")?;
        let bind_address = Self::env_var("MAGAZINE_ADMIN_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("MAGAZINE_ADMIN_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("MAGAZINE_ADMIN_DB_NAME")?;
        let default_page_size = Self::env_var("MAGAZINE_ADMIN_DEFAULT_PAGE_SIZE")?.parse()?;
        let max_page_size = Self::env_var("MAGAZINE_ADMIN_MAX_PAGE_SIZE")?.parse()?;

        if default_page_size == 0 || default_page_size > max_page_size {
            return Err(anyhow!(
                "MAGAZINE_ADMIN_DEFAULT_PAGE_SIZE must be in range 1..=MAGAZINE_ADMIN_MAX_PAGE_SIZE"
            ));
        }

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            default_page_size,
            max_page_size,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
