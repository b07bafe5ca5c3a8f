//! Letter-coded integers
//!
//! Every extent and coordinate in a Hershey record is a single printable
//! ASCII byte whose value is its distance from `'R'`.

use crate::{HersheyError, Result};

/// Byte that decodes to zero
pub const ORIGIN: u8 = b'R';

/// First byte of a pen-up pair
pub const PEN_UP: u8 = b' ';

/// Smallest decodable value (`' ' - 'R'`)
pub const MIN_VALUE: i32 = 0x20 - ORIGIN as i32;

/// Largest decodable value (`'~' - 'R'`)
pub const MAX_VALUE: i32 = 0x7E - ORIGIN as i32;

/// Decode one letter-coded byte.
///
/// Bytes outside printable ASCII are never produced by the format and are
/// rejected, so results always lie in `MIN_VALUE..=MAX_VALUE`. `position` is
/// only used to report where the bad byte was found.
#[inline]
pub fn value(byte: u8, position: usize) -> Result<i32> {
    if !(0x20..=0x7E).contains(&byte) {
        return Err(HersheyError::InvalidCharacter { position, byte });
    }
    Ok(byte as i32 - ORIGIN as i32)
}
