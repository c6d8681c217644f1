//! Native region labels and their canonical display names.

/// Native label → canonical display name, in control order.
pub const REGION_TABLE: [(&str, &str); 18] = [
    ("전국", "Whole country"),
    ("서울", "Seoul"),
    ("대전", "Daejeon"),
    ("대구", "Daegu"),
    ("부산", "Busan"),
    ("광주", "Gwangju"),
    ("울산", "Ulsan"),
    ("인천", "Incheon"),
    ("세종", "Sejong"),
    ("경기도", "Gyeonggi-do"),
    ("충청북도", "Chungcheongbuk-do"),
    ("충청남도", "Chungcheongnam-do"),
    ("경상북도", "Gyeongsangbuk-do"),
    ("경상남도", "Gyeongsangnam-do"),
    ("전라북도", "Jeollabuk-do"),
    ("전라남도", "Jeollanam-do"),
    ("강원도", "Gangwon-do"),
    ("제주도", "Jeju"),
];

/// Native labels offered by the region multi-select.
pub fn region_options() -> impl Iterator<Item = &'static str> {
    REGION_TABLE.iter().map(|(native, _)| *native)
}

/// Canonical name for one label; unknown labels pass through unchanged.
#[must_use]
pub fn canonical_region(label: &str) -> &str {
    REGION_TABLE
        .iter()
        .find(|(native, _)| *native == label)
        .map_or(label, |(_, canonical)| canonical)
}

/// Translates a sequence of labels element-wise, preserving length and order.
#[must_use]
pub fn translate_regions<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    labels
        .iter()
        .map(|label| canonical_region(label.as_ref()).to_owned())
        .collect()
}
