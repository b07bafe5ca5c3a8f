//! Edge case tests for fos-hershey
//!
//! Malformed records, degenerate strokes and out-of-range characters.

use fos_hershey::fonts::MUSIC;
use fos_hershey::*;

// ============================================================================
// RECORD SHAPE
// ============================================================================

#[test]
fn test_extents_only_record() {
    let glyph = decode("JZ", 96).unwrap();
    assert!(glyph.segments().is_empty());
    assert_eq!(glyph.advance(), ('Z' as i32 - 'R' as i32) - ('J' as i32 - 'R' as i32));
}

#[test]
fn test_pen_up_only_body() {
    let glyph = decode("JZ ", 96).unwrap();
    assert!(glyph.is_empty());
    assert_eq!(glyph.advance(), 16);
}

#[test]
fn test_dangling_half_pair() {
    let err = decode("JZK", 96).unwrap_err();
    assert!(matches!(err, HersheyError::MalformedGlyph { len: 3, .. }));

    // A good stroke before the bad tail is not returned either
    assert!(decode("JZRRSS T", 96).is_err());
}

#[test]
fn test_too_short() {
    assert!(matches!(decode("", 96), Err(HersheyError::MalformedGlyph { len: 0, .. })));
    assert!(matches!(decode("R", 96), Err(HersheyError::MalformedGlyph { len: 1, .. })));
}

#[test]
fn test_non_ascii_rejected() {
    // 'é' is two bytes, both outside printable ASCII
    let err = decode("JZ\u{e9}", 96).unwrap_err();
    assert_eq!(err, HersheyError::InvalidCharacter { position: 2, byte: 0xC3 });
}

#[test]
fn test_control_byte_in_extents() {
    let err = decode("\x01Z", 96).unwrap_err();
    assert_eq!(err, HersheyError::InvalidCharacter { position: 0, byte: 0x01 });
}

// ============================================================================
// PEN-UP HANDLING
// ============================================================================

#[test]
fn test_consecutive_pen_ups_add_nothing() {
    let single = decode("RRRRSS TTUU", 96).unwrap();
    let double = decode("RRRRSS  TTUU", 96).unwrap();
    let many = decode("RRRRSS     TTUU", 96).unwrap();
    assert_eq!(single.segments().len(), 2);
    assert_eq!(single, double);
    assert_eq!(single, many);
}

#[test]
fn test_leading_and_trailing_pen_ups() {
    let glyph = decode("RR RRSS ", 96).unwrap();
    assert_eq!(glyph.segments().len(), 1);
}

#[test]
fn test_single_point_strokes_dropped() {
    let glyph = decode("RRRR SS TTUU VV", 96).unwrap();
    assert_eq!(glyph.segments().len(), 1);
    assert_eq!(glyph.segments()[0].points(), &[Point::new(2, 2), Point::new(3, 3)]);
}

#[test]
fn test_repeated_point_kept() {
    // Two identical points still form a (zero-length) stroke
    let glyph = decode("RRSSSS", 96).unwrap();
    assert_eq!(glyph.segments().len(), 1);
    assert_eq!(glyph.stroke_length(), 0.0);
}

// ============================================================================
// CHARACTER LOOKUP
// ============================================================================

#[test]
fn test_below_base_code() {
    assert_eq!(
        MUSIC.decode_code(31),
        Err(HersheyError::GlyphIndexOutOfRange { code: 31 })
    );
    assert!(MUSIC.decode_code(0).is_err());
}

#[test]
fn test_above_last_code() {
    assert!(MUSIC.decode_code(0x7F).is_ok());
    assert_eq!(
        MUSIC.decode_code(0x80),
        Err(HersheyError::GlyphIndexOutOfRange { code: 0x80 })
    );
    assert!(MUSIC.decode_char('\u{1F3B5}').is_err());
}

#[test]
fn test_zero_scale_table() {
    static BROKEN: FontTable = FontTable::new("broken", 0, &["JZ"]);
    assert_eq!(BROKEN.decode_char(' '), Err(HersheyError::InvalidScale));
    assert!(BROKEN.validate().is_err());
}

// ============================================================================
// ERROR DISPLAY
// ============================================================================

#[test]
fn test_error_messages() {
    let msg = decode("JZK", 96).unwrap_err().to_string();
    assert!(msg.contains("3 bytes"), "{msg}");

    let msg = MUSIC.decode_code(31).unwrap_err().to_string();
    assert!(msg.contains("31"), "{msg}");

    let msg = decode("J\x7f", 96).unwrap_err().to_string();
    assert!(msg.contains("0x7f"), "{msg}");
}
