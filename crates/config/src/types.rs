//! Configuration types.

/// Service configuration, fully resolved.
///
/// Every export is stateless per request; nothing here is mutated after
/// startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
    /// Page-display metadata for the upload form.
    pub page: PageConfig,
}

/// Text shown on the upload form page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub title: String,
    pub tagline: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5870,
            max_upload_bytes: 10 * 1024 * 1024,
            page: PageConfig::default(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "JSON to CSV Converter".to_string(),
            tagline: "Easily convert multiple JSON files into a single CSV, Excel, or JSON file."
                .to_string(),
        }
    }
}
