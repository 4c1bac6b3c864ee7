//! Pre-computed static text styles and shared font references.
//!
//! Alignment styles are `const` so no style objects are constructed per
//! frame. Value text needs dynamic colors (the erase pass repaints the old
//! text in the tile background color), so only the fonts are shared and
//! callers build `MonoTextStyle::new(FONT, color)` at the call site.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for the splash title.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for tile values, ribbon labels, and boot rows.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Large font for tile values. Usage: `MonoTextStyle::new(VALUE_FONT, color)`.
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium font for unit labels on the tiles.
pub const UNIT_FONT: &MonoFont = &FONT_10X20;

/// Medium font for the compass point labels on the ribbon.
pub const RIBBON_FONT: &MonoFont = &FONT_10X20;

/// Large font for the boot splash title.
pub const TITLE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium font for the boot probe rows.
pub const CONSOLE_FONT: &MonoFont = &FONT_10X20;
