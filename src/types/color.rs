//! Color values written into layer records

/// The nine standard ACI colors with their RGB values
const STANDARD_COLORS: [(u8, (u8, u8, u8)); 9] = [
    (1, (255, 0, 0)),
    (2, (255, 255, 0)),
    (3, (0, 255, 0)),
    (4, (0, 255, 255)),
    (5, (0, 0, 255)),
    (6, (255, 0, 255)),
    (7, (255, 255, 255)),
    (8, (128, 128, 128)),
    (9, (192, 192, 192)),
];

/// A DXF color
///
/// Layer records only carry a concrete color; `ByLayer` and `ByBlock` are
/// written as white there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// ACI value for a layer record (group 62)
    ///
    /// True colors snap to the nearest standard color.
    pub fn layer_index(&self) -> i16 {
        match self {
            Color::ByLayer | Color::ByBlock => 7,
            Color::Index(0) => 7,
            Color::Index(i) => *i as i16,
            Color::Rgb { r, g, b } => nearest_standard_index(*r, *g, *b),
        }
    }

    /// Packed 24-bit true color (group 420), if this is an RGB color
    pub fn true_color(&self) -> Option<i32> {
        match self {
            Color::Rgb { r, g, b } => Some(((*r as i32) << 16) | ((*g as i32) << 8) | (*b as i32)),
            _ => None,
        }
    }
}

fn nearest_standard_index(r: u8, g: u8, b: u8) -> i16 {
    let distance = |(sr, sg, sb): (u8, u8, u8)| {
        let dr = r as i32 - sr as i32;
        let dg = g as i32 - sg as i32;
        let db = b as i32 - sb as i32;
        dr * dr + dg * dg + db * db
    };

    STANDARD_COLORS
        .iter()
        .min_by_key(|(_, rgb)| distance(*rgb))
        .map(|(index, _)| *index as i16)
        .unwrap_or(7)
}
