use serde::{Deserialize, Serialize};

use crate::render::Color;

const PAIRED: [Color; 12] = [
    Color::hex(0xa6cee3),
    Color::hex(0x1f78b4),
    Color::hex(0xb2df8a),
    Color::hex(0x33a02c),
    Color::hex(0xfb9a99),
    Color::hex(0xe31a1c),
    Color::hex(0xfdbf6f),
    Color::hex(0xff7f00),
    Color::hex(0xcab2d6),
    Color::hex(0x6a3d9a),
    Color::hex(0xffff99),
    Color::hex(0xb15928),
];

const SET2: [Color; 8] = [
    Color::hex(0x66c2a5),
    Color::hex(0xfc8d62),
    Color::hex(0x8da0cb),
    Color::hex(0xe78ac3),
    Color::hex(0xa6d854),
    Color::hex(0xffd92f),
    Color::hex(0xe5c494),
    Color::hex(0xb3b3b3),
];

const CATEGORY10: [Color; 10] = [
    Color::hex(0x1f77b4),
    Color::hex(0xff7f0e),
    Color::hex(0x2ca02c),
    Color::hex(0xd62728),
    Color::hex(0x9467bd),
    Color::hex(0x8c564b),
    Color::hex(0xe377c2),
    Color::hex(0x7f7f7f),
    Color::hex(0xbcbd22),
    Color::hex(0x17becf),
];

/// Fixed categorical color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Paired,
    Set2,
    Category10,
}

impl Palette {
    #[must_use]
    pub fn colors(self) -> &'static [Color] {
        match self {
            Self::Paired => &PAIRED,
            Self::Set2 => &SET2,
            Self::Category10 => &CATEGORY10,
        }
    }

    /// Color for a point or series index, wrapping past the end.
    #[must_use]
    pub fn color(self, index: usize) -> Color {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}
