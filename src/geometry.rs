/// Width/height pair in host layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square size with equal sides.
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl From<f32> for Size {
    fn from(side: f32) -> Self {
        Self::square(side)
    }
}

impl From<f64> for Size {
    fn from(side: f64) -> Self {
        Self::square(side as f32)
    }
}

impl From<i32> for Size {
    fn from(side: i32) -> Self {
        Self::square(side as f32)
    }
}

/// Per-edge margins used by fill and distribution operations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same margin on all four edges.
    pub const fn uniform(margin: f32) -> Self {
        Self {
            top: margin,
            left: margin,
            bottom: margin,
            right: margin,
        }
    }
}

impl From<f32> for Insets {
    fn from(margin: f32) -> Self {
        Self::uniform(margin)
    }
}

impl From<f64> for Insets {
    fn from(margin: f64) -> Self {
        Self::uniform(margin as f32)
    }
}

impl From<i32> for Insets {
    fn from(margin: i32) -> Self {
        Self::uniform(margin as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_size_from_scalar() {
        let size: Size = 24.0.into();
        assert_eq!(size, Size::new(24.0, 24.0));
    }

    #[test]
    fn uniform_insets_from_scalar() {
        let insets: Insets = 8.into();
        assert_eq!(insets, Insets::new(8.0, 8.0, 8.0, 8.0));
    }
}
