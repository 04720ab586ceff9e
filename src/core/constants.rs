/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings and numbers used across the
/// application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - one status line per move and rewrite
    pub const TEXT: &str = "text";
    /// JSON output format - structured summary for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Include matching constants
pub mod matching {
    /// An opening `<` or `"`, one or more characters that are neither `>` nor `"`,
    /// then a closing `>` or `"`. The delimiters do not need to pair up.
    pub const INCLUDE_TOKEN_PATTERN: &str = r#"[<"]([^">]+)[>"]"#;

    /// Compare only the final path component of the include token
    pub const BASENAME: &str = "basename";
    /// Compare the whole include token against the old path
    pub const FULL_PATH: &str = "full-path";

    /// Default match mode
    pub const DEFAULT: &str = BASENAME;

    /// All valid match modes
    pub const ALL: [&str; 2] = [BASENAME, FULL_PATH];
}

/// File processing constants
pub mod files {
    /// Suffixes of files scanned for include references
    pub const DEFAULT_EXTENSIONS: [&str; 6] = [".c", ".h", ".cpp", ".hpp", ".txt", ".inl"];
    /// Config file searched for in the current and parent directories
    pub const CONFIG_FILE_NAME: &str = ".relink.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    /// Wrong argument count, missing file, or any reported failure
    pub const FAILURE: i32 = 1;
}

/// Usage lines printed on a wrong argument count
pub mod usage {
    pub const RELINK: &str = "Usage: relink <old_path> <new_path>";
    pub const IFDEF_WRAP: &str = "Usage: ifdef-wrap STRING file.c";
}
