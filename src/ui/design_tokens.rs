// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors (navy backdrop, brand blues, grayscale)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Backdrop navy scale
    pub const NAVY_900: Color = Color::from_rgb(0.102, 0.212, 0.365);
    pub const NAVY_600: Color = Color::from_rgb(0.176, 0.353, 0.529);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.192, 0.51, 0.808);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.42, 0.7);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Faint surface over the backdrop (video pane, notice panel).
    pub const SURFACE: f32 = 0.12;
    /// Subtle borders over the backdrop.
    pub const BORDER: f32 = 0.3;
    /// Secondary text over the backdrop.
    pub const TEXT_MUTED: f32 = 0.7;
    /// Pressed overlay buttons.
    pub const OVERLAY_PRESSED: f32 = 0.8;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XXL: f32 = 64.0;

    /// Height of the video preview pane.
    pub const PREVIEW_PANE_HEIGHT: f32 = 320.0;
    /// Maximum width of the permission notice panel.
    pub const NOTICE_MAX_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Screen titles.
    pub const TITLE_LG: f32 = 24.0;
    /// Section headings.
    pub const TITLE_MD: f32 = 20.0;
    /// Primary content text.
    pub const BODY: f32 = 16.0;
    /// Secondary, supporting text.
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}
