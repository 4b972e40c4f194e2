pub struct MagazinesServiceConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}
