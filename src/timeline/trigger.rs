//! Scroll-position grammar for segment boundaries.
//!
//! Two forms are accepted:
//!
//! - `"<element-edge> <viewport-edge>"`: the scroll offset at which the
//!   given edge of the bound section meets the given edge of the viewport,
//!   e.g. `"top bottom"` (section top enters at the viewport bottom) or
//!   `"top top"`. An edge is `top`, `center`, `bottom`, a percentage
//!   (`25%`) or a pixel offset (`120px`, `120`).
//! - `"+=<length>"` / `"-=<length>"`: relative to the resolved start, where
//!   the length is a percentage of the viewport height or pixels. Only valid
//!   as a segment end.

use std::fmt;
use std::str::FromStr;

use crate::error::VantageError;
use crate::host::SectionRect;

/// A point along an element or the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Vertical center.
    Center,
    /// Bottom edge.
    Bottom,
    /// Percentage of the extent, measured from the top.
    Percent(f32),
    /// Pixels from the top.
    Pixels(f32),
}

impl Edge {
    /// Distance from the top for an extent of `extent` pixels.
    #[must_use]
    pub fn offset(self, extent: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => extent * 0.5,
            Self::Bottom => extent,
            Self::Percent(p) => extent * p / 100.0,
            Self::Pixels(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = VantageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            other => match parse_length(other)? {
                Length::ViewportPercent(p) => Ok(Self::Percent(p)),
                Length::Pixels(px) => Ok(Self::Pixels(px)),
            },
        }
    }
}

/// A signed distance used by relative positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Pixels(f32),
    /// Percentage of the viewport height.
    ViewportPercent(f32),
}

impl Length {
    /// Convert to pixels for the given viewport height.
    #[must_use]
    pub fn to_pixels(self, viewport_height: f32) -> f32 {
        match self {
            Self::Pixels(px) => px,
            Self::ViewportPercent(p) => viewport_height * p / 100.0,
        }
    }

    fn negated(self) -> Self {
        match self {
            Self::Pixels(px) => Self::Pixels(-px),
            Self::ViewportPercent(p) => Self::ViewportPercent(-p),
        }
    }
}

fn parse_length(s: &str) -> Result<Length, VantageError> {
    let invalid = || VantageError::InvalidScrollPosition(format!("bad length `{s}`"));
    let (number, percent) = if let Some(n) = s.strip_suffix('%') {
        (n, true)
    } else if let Some(n) = s.strip_suffix("px") {
        (n, false)
    } else {
        (s, false)
    };
    let value: f32 = number.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(if percent {
        Length::ViewportPercent(value)
    } else {
        Length::Pixels(value)
    })
}

/// Where a segment starts or ends along the page's scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPosition {
    /// Where an edge of the bound section meets an edge of the viewport.
    Align {
        /// Edge of the bound section.
        element: Edge,
        /// Edge of the viewport.
        viewport: Edge,
    },
    /// Offset from the segment's resolved start.
    Relative(Length),
}

impl ScrollPosition {
    /// `"top bottom"`: the section's top enters at the bottom of the viewport.
    pub const ENTER: Self = Self::Align {
        element: Edge::Top,
        viewport: Edge::Bottom,
    };

    /// `"bottom top"`: the section's bottom leaves at the top of the viewport.
    pub const LEAVE: Self = Self::Align {
        element: Edge::Bottom,
        viewport: Edge::Top,
    };

    /// Whether this position depends on a previously resolved start.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// Resolve to a document scroll offset. Relative positions need `start`
    /// and yield `None` without one.
    #[must_use]
    pub fn resolve(
        &self,
        section: SectionRect,
        viewport_height: f32,
        start: Option<f32>,
    ) -> Option<f32> {
        match *self {
            Self::Align { element, viewport } => Some(
                section.top + element.offset(section.height)
                    - viewport.offset(viewport_height),
            ),
            Self::Relative(length) => {
                start.map(|s| s + length.to_pixels(viewport_height))
            }
        }
    }
}

impl FromStr for ScrollPosition {
    type Err = VantageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(rest) = trimmed.strip_prefix("+=") {
            return parse_length(rest.trim()).map(Self::Relative);
        }
        if let Some(rest) = trimmed.strip_prefix("-=") {
            return parse_length(rest.trim())
                .map(|len| Self::Relative(len.negated()));
        }

        let mut parts = trimmed.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self::Align {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(VantageError::InvalidScrollPosition(format!(
                "expected `<element-edge> <viewport-edge>` or `+=<length>`, \
                 got `{s}`"
            ))),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Center => f.write_str("center"),
            Self::Bottom => f.write_str("bottom"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Align { element, viewport } => {
                write!(f, "{element} {viewport}")
            }
            Self::Relative(Length::Pixels(px)) if *px < 0.0 => {
                write!(f, "-={}px", -px)
            }
            Self::Relative(Length::Pixels(px)) => write!(f, "+={px}px"),
            Self::Relative(Length::ViewportPercent(p)) if *p < 0.0 => {
                write!(f, "-={}%", -p)
            }
            Self::Relative(Length::ViewportPercent(p)) => write!(f, "+={p}%"),
        }
    }
}
