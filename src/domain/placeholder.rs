//! Deterministic placeholder slide backgrounds.
//!
//! Each role gets a solid background plus a single accent shape. Shapes are
//! kept clear of the image edges so a corner pixel always shows the
//! background color.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::domain::AppError;

pub const WIDTH: u32 = 1920;
pub const HEIGHT: u32 = 1080;

/// Slide role a placeholder background stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderRole {
    Title,
    Section,
    Content,
}

impl PlaceholderRole {
    pub const ALL: [PlaceholderRole; 3] =
        [PlaceholderRole::Title, PlaceholderRole::Section, PlaceholderRole::Content];

    pub fn name(self) -> &'static str {
        match self {
            PlaceholderRole::Title => "title",
            PlaceholderRole::Section => "section",
            PlaceholderRole::Content => "content",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            PlaceholderRole::Title => "title_bg.jpg",
            PlaceholderRole::Section => "section_bg.jpg",
            PlaceholderRole::Content => "content_bg.jpg",
        }
    }

    pub fn background(self) -> Rgb<u8> {
        match self {
            PlaceholderRole::Title => Rgb([31, 58, 96]),
            PlaceholderRole::Section => Rgb([142, 68, 173]),
            PlaceholderRole::Content => Rgb([236, 240, 241]),
        }
    }

    pub fn accent(self) -> Rgb<u8> {
        match self {
            PlaceholderRole::Title => Rgb([241, 196, 15]),
            PlaceholderRole::Section => Rgb([255, 255, 255]),
            PlaceholderRole::Content => Rgb([52, 152, 219]),
        }
    }

    fn decoration(self) -> Decoration {
        match self {
            PlaceholderRole::Title => {
                Decoration::Rect { left: 192, top: 500, right: 1728, bottom: 580 }
            }
            PlaceholderRole::Section => Decoration::Disc { cx: 960, cy: 540, radius: 300 },
            PlaceholderRole::Content => {
                Decoration::Rect { left: 96, top: 108, right: 128, bottom: 972 }
            }
        }
    }

    /// Render the full-resolution background.
    pub fn render(self) -> RgbImage {
        let decoration = self.decoration();
        let (background, accent) = (self.background(), self.accent());
        RgbImage::from_fn(WIDTH, HEIGHT, |x, y| {
            if decoration.contains(x, y) { accent } else { background }
        })
    }

    /// Render and encode as JPEG.
    pub fn encode_jpeg(self) -> Result<Vec<u8>, AppError> {
        let mut bytes = Vec::new();
        self.render().write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg).map_err(|e| {
            AppError::AssetGeneration {
                asset: self.file_name().to_string(),
                details: e.to_string(),
            }
        })?;
        Ok(bytes)
    }
}

#[derive(Debug, Clone, Copy)]
enum Decoration {
    Rect { left: u32, top: u32, right: u32, bottom: u32 },
    Disc { cx: u32, cy: u32, radius: u32 },
}

impl Decoration {
    fn contains(self, x: u32, y: u32) -> bool {
        match self {
            Decoration::Rect { left, top, right, bottom } => {
                (left..right).contains(&x) && (top..bottom).contains(&y)
            }
            Decoration::Disc { cx, cy, radius } => {
                let dx = i64::from(x) - i64::from(cx);
                let dy = i64::from(y) - i64::from(cy);
                dx * dx + dy * dy <= i64::from(radius) * i64::from(radius)
            }
        }
    }
}
