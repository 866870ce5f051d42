//! Shared theme constants for slate UI components

use iced::Color;

/// Panel background
pub const BG_DARK: Color = Color::from_rgb(0.12, 0.12, 0.14);

/// Row hover / header background
pub const BG_MEDIUM: Color = Color::from_rgb(0.18, 0.18, 0.20);

/// Divider and border color
pub const BORDER_COLOR: Color = Color::from_rgb(0.35, 0.35, 0.40);

/// Primary text
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.9, 0.9, 0.9);

/// Secondary text (metadata lines)
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.65);

/// Accent for actions and the "Added" badge
pub const ACCENT_COLOR: Color = Color::from_rgb(0.3, 0.7, 0.9);

/// Error messages
pub const ERROR_COLOR: Color = Color::from_rgb(0.9, 0.35, 0.3);

/// Height of a chart row in the picker list
pub const CHART_ROW_HEIGHT: f32 = 56.0;

/// Extra row height when a chart shows its description
pub const CHART_ROW_SUMMARY_HEIGHT: f32 = 16.0;
