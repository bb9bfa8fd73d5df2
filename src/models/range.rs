use std::net::Ipv4Addr;

use crate::error::FilterError;

pub const MAX_MASK: u8 = 32;

/// Lower address bound with an optional subnet mask length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    pub lower_bound: Ipv4Addr,
    pub mask: Option<u8>,
}

impl AddressRange {
    pub fn new(lower_bound: Ipv4Addr, mask: Option<u8>) -> Result<Self, FilterError> {
        match mask {
            Some(m) if m > MAX_MASK => Err(FilterError::InvalidMask(m)),
            _ => Ok(AddressRange { lower_bound, mask }),
        }
    }
}
