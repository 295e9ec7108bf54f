use std::fmt;

const MM_TO_PT: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, PartialEq)]
pub enum PageSize {
    A4,
    Letter,
    Legal,
    A3,
    Custom(f32, f32), // width, height in mm
}

impl PageSize {
    /// Physical dimensions in millimeters, portrait orientation.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::A3 => (297.0, 420.0),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            top: 20.0,
            bottom: 20.0,
            left: 20.0,
            right: 20.0,
        }
    }
}

impl Margin {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Margin { top, bottom, left, right }
    }

    pub fn uniform(size: f32) -> Self {
        Margin {
            top: size,
            bottom: size,
            left: size,
            right: size,
        }
    }
}

/// Physical page description attached to every [`Document`](crate::models::Document).
///
/// Margins and page dimensions are in millimeters; conversion to points
/// happens only where a drawing surface needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margin: Margin,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            margin: Margin::default(),
        }
    }
}

impl PageLayout {
    pub fn new(page_size: PageSize, orientation: Orientation, margin: Margin) -> Self {
        PageLayout {
            page_size,
            orientation,
            margin,
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Page width and height in points, orientation applied.
    pub fn page_size_pt(&self) -> (f32, f32) {
        let (w, h) = self.page_size.dimensions();
        let (w, h) = match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        };
        (w * MM_TO_PT, h * MM_TO_PT)
    }
}
