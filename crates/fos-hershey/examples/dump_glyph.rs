//! Example: print the decoded strokes of a few characters
//!
//! Usage: `cargo run --example dump_glyph -- [font] [text]`
//! Set `RUST_LOG=fos_hershey=trace` to see per-glyph decoding.

use fos_hershey::{fonts, Config, GlyphOutline, OutlineCommand, StrokeFont};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let font_name = args.next().unwrap_or_else(|| "music".to_string());
    let text = args.next().unwrap_or_else(|| "!A".to_string());

    let Some(table) = fonts::by_name(&font_name) else {
        eprintln!("Unknown font '{font_name}'");
        std::process::exit(1);
    };

    let font = StrokeFont::new(table, Config { height: table.scale() as f32, ..Config::default() });

    for ch in text.chars() {
        let mut outline = GlyphOutline::new();
        match font.draw_glyph(ch, 0.0, 0.0, &mut outline) {
            Ok(advance) => {
                println!("{ch:?}: advance {advance}, {} strokes", outline.stroke_count());
                for command in &outline.commands {
                    match command {
                        OutlineCommand::MoveTo(x, y) => print!("\n  M {x},{y}"),
                        OutlineCommand::LineTo(x, y) => print!(" L {x},{y}"),
                    }
                }
                println!();
            }
            Err(e) => println!("{ch:?}: {e}"),
        }
    }
}
