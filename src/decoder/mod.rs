//! Hardware identifier decoding
//!
//! Normalises raw SMBIOS/DMI identifiers into the comparable forms the
//! classifier needs. The decode helpers are pure and total: malformed input
//! yields `None`, never an error.

pub mod time_low;

// Re-export main helpers
pub use time_low::reversed_time_low_hex;
