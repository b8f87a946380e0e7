//! Color constants for the blog theme
//!
//! Light page background, white cards, cyan primary actions, pink for the
//! sign-out action, red/green banner pairs.

use eframe::egui::Color32;

/// Page background - light gray
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Card/form background - white
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Header bar background - white
pub const HEADER_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Primary accent - cyan
pub const ACCENT: Color32 = Color32::from_rgb(0x08, 0x91, 0xB2);

/// Primary accent, hovered
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x0E, 0x74, 0x90);

/// Sign-out accent - pink
pub const PINK: Color32 = Color32::from_rgb(0xEC, 0x48, 0x99);

/// Primary text - near black
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Secondary text - gray
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x4B, 0x55, 0x63);

/// Muted text - light gray
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Text on accent backgrounds
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Success banner background
pub const SUCCESS_BG: Color32 = Color32::from_rgb(0xDC, 0xFC, 0xE7);

/// Success banner text
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(0x15, 0x80, 0x3D);

/// Error banner background
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFE, 0xE2, 0xE2);

/// Error banner text
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);

/// Like button active - pink tint
pub const LIKE_ACTIVE_BG: Color32 = Color32::from_rgb(0xFC, 0xE7, 0xF3);

/// Like button active text
pub const LIKE_ACTIVE_TEXT: Color32 = Color32::from_rgb(0xDB, 0x27, 0x77);

/// Like button inactive - gray tint
pub const LIKE_INACTIVE_BG: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

/// Like button inactive text
pub const LIKE_INACTIVE_TEXT: Color32 = Color32::from_rgb(0x4B, 0x55, 0x63);

/// Separator lines
pub const SEPARATOR: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
