use clap::ValueEnum;

/// How command output is printed
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum FormatType {
    /// Human readable text and tables
    #[default]
    Plain,
    /// A versioned JSON document on stdout
    Json,
}

impl FormatType {
    pub const fn is_json(&self) -> bool {
        matches!(self, FormatType::Json)
    }
}
