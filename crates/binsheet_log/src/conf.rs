//! Log grammar constants and naming defaults.

/// Line prefix carrying the lot identifier.
pub const C_PREFIX_LOT: &str = "LOT:";
/// Line prefix carrying the wafer identifier.
pub const C_PREFIX_WAFER: &str = "WAFER:";
/// Line prefix carrying whitespace-separated bin tokens.
pub const C_PREFIX_ROW_DATA: &str = "RowData:";
/// Token marking an untested die; ignored by every extraction mode.
pub const C_TOKEN_PLACEHOLDER: &str = "___";
/// Prefix prepended to a raw key that has no user-assigned name.
pub const C_FALLBACK_PREFIX_DEFAULT: &str = "BIN";
