//! The Belt: a 48-page × 256-byte address space.

use crate::error::{KernelError, Result};

pub const PAGE_COUNT: u16 = 48;
pub const PAGE_SIZE: u32 = 256;
pub const ADDRESS_MAX: u32 = PAGE_COUNT as u32 * PAGE_SIZE - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeltAddress {
    pub page: u8,
    pub byte: u8,
    pub address: u16,
}

/// `beltAddress(page, byte)`: pack into a linear address `256*page + byte`.
pub fn compute_belt_address(page: u8, byte: u8) -> Result<BeltAddress> {
    if page as u16 >= PAGE_COUNT {
        return Err(KernelError::range("page", page as i64, 0, 47));
    }
    let address = 256u16 * page as u16 + byte as u16;
    Ok(BeltAddress {
        page,
        byte,
        address,
    })
}

/// `decodeBeltAddress(address)`: the inverse of [`compute_belt_address`].
pub fn decompose_belt_address(address: u16) -> Result<BeltAddress> {
    if address as u32 > ADDRESS_MAX {
        return Err(KernelError::range(
            "belt address",
            address as i64,
            0,
            ADDRESS_MAX as i64,
        ));
    }
    let page = (address / 256) as u8;
    let byte = (address % 256) as u8;
    Ok(BeltAddress {
        page,
        byte,
        address,
    })
}
