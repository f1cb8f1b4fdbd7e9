use crate::params::ParallaxParams;

/// Speed class of a parallax target, resolved from its CSS classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParallaxLayer {
    Geometry,
    Section,
}

impl ParallaxLayer {
    pub fn from_classes<'a>(mut classes: impl Iterator<Item = &'a str>) -> Self {
        if classes.any(|c| c == "geometry") {
            ParallaxLayer::Geometry
        } else {
            ParallaxLayer::Section
        }
    }

    #[inline]
    pub fn speed(self, params: &ParallaxParams) -> f64 {
        match self {
            ParallaxLayer::Geometry => params.geometry_speed,
            ParallaxLayer::Section => params.default_speed,
        }
    }
}

/// Vertical offset for an element whose bounding box starts at `rect_top`
/// with height `rect_height`, relative to the viewport center.
#[inline]
pub fn parallax_offset(rect_top: f64, rect_height: f64, viewport_height: f64, speed: f64) -> f64 {
    let midpoint = rect_top + rect_height * 0.5;
    (midpoint - viewport_height * 0.5) * speed
}

#[inline]
pub fn translate_y_css(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}
