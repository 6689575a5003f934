//! Common constants used across the project

/// Terminal rendering conventions
pub mod render {
    /// Line printed at the start of every render iteration
    pub const SEPARATOR: &str =
        "----------------------------------------------------------------------";
    /// Marker printed before the user types
    pub const PROMPT_MARKER: &str = ">>";
    /// Carriage return followed by CSI erase-line
    pub const CLEAR_LINE: &str = "\r\u{1b}[K";
    pub const OPTIONS_HEADER: &str = "Options:";
}

/// Paging and list limits
pub mod limits {
    /// Rows shown per page in viewers, selectors and search results
    pub const PAGE_SIZE: usize = 10;
    /// Maximum number of openers on a single event
    pub const MAX_OPENERS: usize = 20;
    /// Default number of fuzzy matches returned by a search
    pub const DEFAULT_SEARCH_MAX_COUNT: usize = 10;
}

/// Date handling
pub mod dates {
    /// chrono format used for parsing and rendering `mm/dd/yyyy`
    pub const DATE_FORMAT: &str = "%m/%d/%Y";
}

/// Common file names and paths
pub mod files {
    pub const CONFIG_DIRECTORY: &str = ".gigbook";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const EVENTS_JSON: &str = "events.json";
    pub const UPCOMING_JSON: &str = "upcoming.json";
    pub const LOG_FILE: &str = "gigbook.log";
    /// Prefix for environment variable overrides
    pub const ENV_PREFIX: &str = "GIGBOOK";
}

/// Default discovery location
pub mod location {
    pub const DEFAULT_CITY: &str = "Atlanta";
    pub const DEFAULT_STATE: &str = "GA";
}
