//! The MedTimer UI color palette.

use medtimer_graphics::types::Color;

// Backgrounds
pub const PAGE_BG: Color = Color::from_rgb8(0xEA, 0xF2, 0xFF);
pub const CARD_BG: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
pub const CARD_BORDER: Color = Color::from_rgb8(0xCB, 0xE9, 0xDD);

// Text (overlaid by the embedding layer; kept for reward artwork)
pub const TEXT: Color = Color::from_rgb8(0x2E, 0x37, 0x48);
pub const MUTED: Color = Color::from_rgb8(0x8A, 0x94, 0xA6);

// Accents
pub const SUCCESS: Color = Color::from_rgb8(0x27, 0xAE, 0x60);
pub const SUCCESS_BG: Color = Color::from_rgb8(0xE7, 0xF8, 0xEF);
pub const SUCCESS_TINT: Color = Color::from_rgb8(0xF2, 0xFB, 0xF6);
pub const PRIMARY: Color = Color::from_rgb8(0x2D, 0x79, 0xFF);
pub const DIVIDER: Color = Color::from_rgb8(0xE8, 0xED, 0xF5);
pub const GAUGE_ORANGE: Color = Color::from_rgb8(0xFF, 0x7A, 0x00);
pub const GAUGE_RING: Color = Color::from_rgb8(0xE9, 0xEC, 0xF2);

// Reward artwork
pub const REWARD_GOLD: Color = Color::from_rgb8(0xF4, 0xB4, 0x00);
pub const REWARD_SUN: Color = Color::from_rgb8(0xFF, 0xD9, 0x3D);
