//! Theme configuration for Basic Discoverer.

use iced::Color;

/// Application colors (dark panels, light text).
pub mod colors {
    use super::Color;

    /// Window background
    pub const BACKGROUND: Color = Color::from_rgb(0.12, 0.12, 0.12);

    /// Section panel background
    pub const SURFACE: Color = Color::from_rgb(0.16, 0.16, 0.16);

    /// Log view background
    pub const CARD: Color = Color::from_rgb(0.14, 0.14, 0.14);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);

    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);

    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.25);
}

/// Spacing constants.
pub mod spacing {
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
}

/// Font sizes.
pub mod font {
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Section title size
    pub const MD: f32 = 14.0;
    /// Header font size
    pub const HEADER: f32 = 18.0;
}
