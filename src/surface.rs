//! The display-surface capability the widget operates on.
//!
//! A widget needs exactly two things from its host: a container that can be
//! measured and can look up a child by selector, and a target element whose
//! inline frame can be written. Everything else about the host (real DOM,
//! headless simulation, test double) stays behind these traits.

use std::fmt;

/// Rendered or intrinsic dimensions, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height. Non-finite for degenerate sizes (zero or negative
    /// height); callers that must not write non-finite styles check
    /// [`Size::is_degenerate`] first.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    pub fn is_degenerate(&self) -> bool {
        !self.aspect().is_finite() || self.aspect() <= 0.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One axis of the applied frame: pinned to a pixel length or left for the
/// host to derive from the natural aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Auto,
    Px(f64),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Auto => f.write_str("auto"),
            Dimension::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// A computed cover fit. Exactly one axis is pixel-pinned and exactly one
/// offset can be non-zero; the other axis scales from the natural aspect
/// ratio. The two shapes are the only legal style combinations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Container is relatively taller than the image: pin the height, let
    /// the width overflow, pull the overflow left to center the crop.
    FillHeight { height: f64, left: i32 },
    /// Container is relatively wider (or equal): pin the width, let the
    /// height overflow, pull the overflow up to center the crop.
    FillWidth { width: f64, top: i32 },
}

impl Placement {
    pub fn frame(&self) -> Frame {
        match *self {
            Placement::FillHeight { height, left } => Frame {
                width: Dimension::Auto,
                height: Dimension::Px(height),
                top: 0,
                left,
            },
            Placement::FillWidth { width, top } => Frame {
                width: Dimension::Px(width),
                height: Dimension::Auto,
                top,
                left: 0,
            },
        }
    }
}

/// The inline styles the widget writes on its target: `width`, `height`,
/// `top`, `left`. Offsets are integer pixels, already truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: Dimension,
    pub height: Dimension,
    pub top: i32,
    pub left: i32,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width:{}; height:{}; top:{}px; left:{}px",
            self.width, self.height, self.top, self.left
        )
    }
}

/// The element being fitted. Implementations may use interior mutability;
/// all receivers are `&self` so cheap shared handles work.
pub trait Element {
    /// Intrinsic dimensions of the underlying resource. Only meaningful
    /// once the host has reported the resource ready.
    fn natural_size(&self) -> Size;

    /// Force `position: absolute` so the offsets in an applied [`Frame`]
    /// position the element within its container.
    fn set_absolute(&self);

    fn add_class(&self, name: &str);

    fn remove_class(&self, name: &str);

    /// Write the inline frame styles.
    fn apply_frame(&self, frame: &Frame);
}

/// The element the image must visually fill.
pub trait Container {
    type Target: Element;

    /// Current rendered dimensions.
    fn rendered_size(&self) -> Size;

    /// Look up the fit target within this container. Zero-or-one match;
    /// the first match wins when the host has several.
    fn select(&self, selector: &str) -> Option<Self::Target>;

    /// Force `overflow: hidden`, and promote default static positioning to
    /// `relative` so the target's offsets resolve against this container.
    /// Any other explicit positioning is left untouched. Called once,
    /// before the first fit.
    fn clip_and_anchor(&self);
}
