use crate::foundation::error::{FractalError, FractalResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Opaque locator for a playable video resource.
///
/// No format validation is performed: any string, including an empty one, is a
/// valid reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VideoRef(String);

impl VideoRef {
    /// Wrap a locator string.
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// The raw locator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VideoRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VideoRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identity of a project record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Wrap an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Axis-aligned rectangle in the unit space of a parent (`0..1` on both axes).
///
/// Kept as plain `f64` fields so recipe tables can be built in `const` context;
/// [`UnitRect::within`] maps it onto concrete parent bounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UnitRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl UnitRect {
    /// The whole parent.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A rectangle of `fraction` x `fraction` centered in the parent.
    pub const fn centered(fraction: f64) -> Self {
        let margin = (1.0 - fraction) / 2.0;
        Self::new(margin, margin, 1.0 - margin, 1.0 - margin)
    }

    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }

    pub fn is_full(self) -> bool {
        self == Self::FULL
    }

    /// Map this unit rectangle into absolute `parent` bounds.
    pub fn within(self, parent: Rect) -> Rect {
        let w = parent.width();
        let h = parent.height();
        Rect::new(
            parent.x0 + self.x0 * w,
            parent.y0 + self.y0 * h,
            parent.x0 + self.x1 * w,
            parent.y0 + self.y1 * h,
        )
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbbaa` form, as a rendering surface would consume it.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Pixel dimensions of the surface a layer stack is sampled onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> FractalResult<Self> {
        if width == 0 || height == 0 {
            return Err(FractalError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Portrait 9:16 preview surface used by the studio.
    pub fn portrait_preview() -> Self {
        Self {
            width: 540,
            height: 960,
        }
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
