use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// Concrete serialization format of an inventory document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => f.write_str("JSON"),
            DocumentFormat::Yaml => f.write_str("YAML"),
        }
    }
}

/// Format as requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pick from the file extension (`.json` is JSON, anything else YAML).
    #[default]
    Auto,
    Json,
    Yaml,
}

impl FormatArg {
    pub fn resolve(self, path: &Path) -> DocumentFormat {
        match self {
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Yaml => DocumentFormat::Yaml,
            FormatArg::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json {
                    DocumentFormat::Json
                } else {
                    // YAML also reads plain JSON.
                    DocumentFormat::Yaml
                }
            }
        }
    }
}
