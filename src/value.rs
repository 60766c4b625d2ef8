use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Underlying integer type of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Repr {
    I8,
    I16,
    #[default]
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl Repr {
    /// Smallest representable value.
    #[must_use]
    pub fn min(self) -> i128 {
        match self {
            Self::I8 => i128::from(i8::MIN),
            Self::I16 => i128::from(i16::MIN),
            Self::I32 => i128::from(i32::MIN),
            Self::I64 => i128::from(i64::MIN),
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => 0,
        }
    }

    /// Largest representable value.
    #[must_use]
    pub fn max(self) -> i128 {
        match self {
            Self::I8 => i128::from(i8::MAX),
            Self::I16 => i128::from(i16::MAX),
            Self::I32 => i128::from(i32::MAX),
            Self::I64 => i128::from(i64::MAX),
            Self::U8 => i128::from(u8::MAX),
            Self::U16 => i128::from(u16::MAX),
            Self::U32 => i128::from(u32::MAX),
            Self::U64 => i128::from(u64::MAX),
        }
    }

    #[must_use]
    pub fn contains(self, value: i128) -> bool {
        value >= self.min() && value <= self.max()
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Repr`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown underlying type: {0}")]
pub struct UnknownRepr(pub String);

impl FromStr for Repr {
    type Err = UnknownRepr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i8" | "int8_t" => Ok(Self::I8),
            "i16" | "int16_t" => Ok(Self::I16),
            "i32" | "int32_t" | "int" => Ok(Self::I32),
            "i64" | "int64_t" => Ok(Self::I64),
            "u8" | "uint8_t" => Ok(Self::U8),
            "u16" | "uint16_t" => Ok(Self::U16),
            "u32" | "uint32_t" => Ok(Self::U32),
            "u64" | "uint64_t" | "size_t" => Ok(Self::U64),
            _ => Err(UnknownRepr(s.to_string())),
        }
    }
}

/// A resolved value does not fit the underlying type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value {value} of enumerator {index} does not fit in {repr}")]
pub struct ValueError {
    pub index: usize,
    pub value: i128,
    pub repr: Repr,
}

/// Resolve per-member explicit values into a dense sequence.
///
/// An explicit slot yields its own value; an absent slot yields the
/// previous value plus one, or zero for the first member. Duplicates
/// and decreasing values are allowed.
///
/// # Errors
///
/// Returns `ValueError` for the first value outside `repr`.
pub fn resolve(explicit: &[Option<i128>], repr: Repr) -> Result<Vec<i128>, ValueError> {
    let mut values = Vec::with_capacity(explicit.len());
    let mut next = Some(0_i128);

    for (index, slot) in explicit.iter().enumerate() {
        let value = match (*slot, next) {
            (Some(value), _) | (None, Some(value)) => value,
            // previous value was i128::MAX
            (None, None) => {
                return Err(ValueError {
                    index,
                    value: i128::MAX,
                    repr,
                });
            }
        };
        if !repr.contains(value) {
            return Err(ValueError { index, value, repr });
        }
        values.push(value);
        next = value.checked_add(1);
    }

    Ok(values)
}
