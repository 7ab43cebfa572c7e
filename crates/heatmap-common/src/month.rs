//! Month naming for axis labels and tooltips.

/// Full English month names, indexed 0..12 (January first).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name for a 1-indexed month (1 = January, 12 = December).
///
/// The dataset carries months 1-indexed while emitted `data-month`
/// attributes are 0-indexed; this helper takes the dataset convention.
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}
