use std::fmt;

/// Inheritance class assigned to a variant by the upstream report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariantClass {
    Biparental,
    PaternalOnly,
    MaternalOnly,
}

impl VariantClass {
    pub const ALL: [VariantClass; 3] = [
        VariantClass::Biparental,
        VariantClass::PaternalOnly,
        VariantClass::MaternalOnly,
    ];

    /// Parse a report token (`BP`, `FF`, `FM`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "BP" => Some(VariantClass::Biparental),
            "FF" => Some(VariantClass::PaternalOnly),
            "FM" => Some(VariantClass::MaternalOnly),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            VariantClass::Biparental => "BP",
            VariantClass::PaternalOnly => "FF",
            VariantClass::MaternalOnly => "FM",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn track(self) -> Track {
        match self {
            VariantClass::Biparental => Track::Biparental,
            VariantClass::PaternalOnly => Track::Paternal,
            VariantClass::MaternalOnly => Track::Maternal,
        }
    }
}

impl fmt::Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Everything that gets a color of its own in the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Biparental,
    Paternal,
    Maternal,
    Roh,
}

/// Color and vertical extent of a track, relative to the row center line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    pub color: (u8, u8, u8),
    pub y_min: f64,
    pub y_max: f64,
    pub label: &'static str,
}

const TRACK_STYLES: [TrackStyle; 4] = [
    // silver, short and centered on the axis
    TrackStyle {
        color: (192, 192, 192),
        y_min: -0.11,
        y_max: 0.11,
        label: "Biparental",
    },
    TrackStyle {
        color: (0x00, 0x61, 0xE5),
        y_min: 0.125,
        y_max: 0.475,
        label: "Paternal",
    },
    TrackStyle {
        color: (0xC6, 0x00, 0x3F),
        y_min: -0.475,
        y_max: -0.125,
        label: "Maternal",
    },
    // mediumaquamarine, offset from the arm's top edge
    TrackStyle {
        color: (102, 205, 170),
        y_min: 0.0,
        y_max: 0.15,
        label: "ROH regions",
    },
];

impl Track {
    /// Legend order, top to bottom.
    pub const LEGEND: [Track; 4] = [Track::Maternal, Track::Paternal, Track::Biparental, Track::Roh];

    pub fn style(self) -> &'static TrackStyle {
        &TRACK_STYLES[self as usize]
    }
}

/// A single report record. `line` is the 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub chromosome: String,
    pub position_bp: u64,
    pub class: VariantClass,
    pub line: usize,
}

/// A region of homozygosity as read from the ROH file. `start_bp <= end_bp`
/// is checked by the clipper, not by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RohInterval {
    pub chromosome: String,
    pub start_bp: u64,
    pub end_bp: u64,
    pub line: usize,
}
