//! Color palette for the week browser.

use ratatui::style::Color;

// ============================================================================
// Backgrounds
// ============================================================================

/// Primary background (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Highlight background for today's card (#1a1f26)
pub const BG_TODAY: Color = Color::Rgb(26, 31, 38);

// ============================================================================
// Day card borders
// ============================================================================

/// Default card border (#1e2530)
pub const BORDER_DEFAULT: Color = Color::Rgb(30, 37, 48);

/// Rest day (#4ade80)
pub const REST: Color = Color::Rgb(74, 222, 128);

/// Strength day (#a78bfa)
pub const STRENGTH: Color = Color::Rgb(167, 139, 250);

/// Sunday long run (#00d4aa)
pub const SUNDAY: Color = Color::Rgb(0, 212, 170);

/// Today (#fbbf24)
pub const TODAY: Color = Color::Rgb(251, 191, 36);

// ============================================================================
// Text
// ============================================================================

/// Primary text (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text, forecast values (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Race-pace marker (#f87171)
pub const RACE: Color = Color::Rgb(248, 113, 113);
