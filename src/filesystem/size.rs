use std::str::FromStr;

use derive_more::Display;
use snafu::{OptionExt, Snafu};

/// Byte-size units used to express filesystem capacities.
///
/// ```
/// use rofs::filesystem::Size;
///
/// assert_eq!(10 * Size::Kilobyte.in_bytes(), 10_240);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Size {
    #[display("B")]
    Byte,
    #[display("KB")]
    Kilobyte,
    #[display("MB")]
    Megabyte,
    #[display("GB")]
    Gigabyte,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Byte, Size::Kilobyte, Size::Megabyte, Size::Gigabyte];

    /// Number of bytes in one unit.
    pub const fn in_bytes(self) -> i64 {
        match self {
            Size::Byte => 1,
            Size::Kilobyte => 1 << 10,
            Size::Megabyte => 1 << 20,
            Size::Gigabyte => 1 << 30,
        }
    }
}

impl FromStr for Size {
    type Err = UnknownSizeUnitError;

    /// Parses a unit suffix such as `KB`. Matching ignores ASCII case.
    fn from_str(unit: &str) -> Result<Self, Self::Err> {
        let unit = unit.trim();
        Size::ALL
            .into_iter()
            .find(|size| size.to_string().eq_ignore_ascii_case(unit))
            .with_context(|| UnknownSizeUnitSnafu {
                unit: unit.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("Unknown size unit '{}'", unit))]
pub struct UnknownSizeUnitError {
    unit: String,
}
