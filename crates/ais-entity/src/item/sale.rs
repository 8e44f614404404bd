//! Item sale information.

use serde::{Deserialize, Serialize};

/// How an item is offered for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum SaleType {
    /// Not for sale.
    #[default]
    NotForSale,
    /// The original changes hands.
    Original,
    /// The buyer receives a copy.
    Copy,
    /// The buyer receives the contents.
    Contents,
}

impl SaleType {
    pub fn code(self) -> i32 {
        match self {
            Self::NotForSale => 0,
            Self::Original => 1,
            Self::Copy => 2,
            Self::Contents => 3,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Original,
            2 => Self::Copy,
            3 => Self::Contents,
            _ => Self::NotForSale,
        }
    }
}

impl From<i32> for SaleType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<SaleType> for i32 {
    fn from(ty: SaleType) -> i32 {
        ty.code()
    }
}

/// Price and sale type attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaleInfo {
    /// Asking price.
    pub price: i32,
    /// Sale mode.
    pub sale_type: SaleType,
}
