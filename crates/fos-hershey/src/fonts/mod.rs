//! Built-in stroke fonts

mod music;

pub use music::MUSIC;

use crate::table::FontTable;

/// All compiled-in fonts
pub fn all() -> &'static [&'static FontTable] {
    static FONTS: [&FontTable; 1] = [&MUSIC];
    &FONTS
}

/// Find a compiled-in font by name (ASCII case-insensitive)
pub fn by_name(name: &str) -> Option<&'static FontTable> {
    all().iter().copied().find(|f| f.name().eq_ignore_ascii_case(name))
}
