//! Placement of the evading button inside the card container.

use crate::rng::RandomSource;

/// Measured size of the card container, in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    /// `None` for a box that has not been laid out yet (zero or non-finite size).
    pub fn measured(width: f64, height: f64) -> Option<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }
}

/// Geometry of the button and the inset it keeps from the container edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvasionBox {
    pub button_width: f64,
    pub button_height: f64,
    pub margin: f64,
}

impl EvasionBox {
    /// Grow the box to the rendered button size. A zero or non-finite
    /// measurement (button not laid out) keeps the configured size.
    pub fn fitting(self, width: f64, height: f64) -> Self {
        let grow = |configured: f64, measured: f64| {
            if measured.is_finite() && measured > 0.0 {
                configured.max(measured)
            } else {
                configured
            }
        };
        Self {
            button_width: grow(self.button_width, width),
            button_height: grow(self.button_height, height),
            margin: self.margin,
        }
    }
}

/// Where the "No" button sits. `Static` is the initial in-flow position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonPlacement {
    #[default]
    Static,
    Absolute { left: f64, top: f64 },
}

impl ButtonPlacement {
    /// Inline style fragment for the button element.
    pub fn to_css(self) -> String {
        match self {
            ButtonPlacement::Static => "position:static;".to_string(),
            ButtonPlacement::Absolute { left, top } => {
                format!("position:absolute;left:{left:.1}px;top:{top:.1}px;")
            }
        }
    }
}

/// Sample a new absolute position. Both axes are `r * free + margin` where
/// `free` is the room left after the button and both margins, clamped at 0.
pub fn place_button(
    container: ContainerSize,
    geom: EvasionBox,
    rng: &mut dyn RandomSource,
) -> ButtonPlacement {
    let free_x = (container.width - geom.button_width - 2.0 * geom.margin).max(0.0);
    let free_y = (container.height - geom.button_height - 2.0 * geom.margin).max(0.0);
    let left = sanitize_unit(rng.next_unit()) * free_x + geom.margin;
    let top = sanitize_unit(rng.next_unit()) * free_y + geom.margin;
    ButtonPlacement::Absolute { left, top }
}

fn sanitize_unit(r: f64) -> f64 {
    if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 }
}
