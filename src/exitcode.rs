//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (e.g. unsupported target scheme)
pub const DATAERR: i32 = 65;

/// Cannot open input (missing favorite or import file)
pub const NOINPUT: i32 = 66;

/// Service unavailable (favorites list)
pub const UNAVAILABLE: i32 = 69;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
