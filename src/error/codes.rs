/// Error code registry for pulseboard
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Data source errors
/// - 3000-3999: Chat errors
/// - 4000-4999: Export errors
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_MISSING_REQUIRED: u16 = 1004;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;

    // Data source errors (2000-2999)
    pub const SOURCE_GENERIC: u16 = 2000;
    pub const SOURCE_UNREACHABLE: u16 = 2001;
    pub const SOURCE_HTTP_STATUS: u16 = 2002;
    pub const SOURCE_INVALID_BODY: u16 = 2003;
    pub const SOURCE_IO_ERROR: u16 = 2004;
    pub const SOURCE_UNSUPPORTED_FORMAT: u16 = 2005;

    // Chat errors (3000-3999)
    pub const CHAT_GENERIC: u16 = 3000;
    pub const CHAT_UNREACHABLE: u16 = 3001;
    pub const CHAT_INVALID_RESPONSE: u16 = 3002;

    // Export errors (4000-4999)
    pub const EXPORT_GENERIC: u16 = 4000;
    pub const EXPORT_CSV_FAILED: u16 = 4001;
    pub const EXPORT_JSON_FAILED: u16 = 4002;

    // Validation errors (7000-7999)
    pub const VALIDATION_GENERIC: u16 = 7000;
    pub const VALIDATION_REQUIRED_FIELD: u16 = 7001;
    pub const VALIDATION_UNKNOWN_ANALYSIS: u16 = 7002;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",
        1004 => "Required configuration field is missing",
        1005 => "Invalid value in configuration",

        2000 => "Generic data source error",
        2001 => "Data source is unreachable",
        2002 => "Data source returned an error status",
        2003 => "Data source returned an unreadable body",
        2004 => "Failed to read data source file",
        2005 => "Unsupported data file format",

        3000 => "Generic chat error",
        3001 => "Chat endpoint is unreachable",
        3002 => "Chat endpoint returned an unreadable response",

        4000 => "Generic export error",
        4001 => "CSV export failed",
        4002 => "JSON export failed",

        7000 => "Generic validation error",
        7001 => "Required field is missing",
        7002 => "Unknown analysis name",

        9000 => "Generic error",

        _ => "Unknown error code",
    }
}
