//! Public interface layer for the `retailchain` program: record layouts, the error taxonomy,
//! instruction tags and instruction data codecs, and off-chain instruction builders.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod authority;
#[cfg(feature = "client")]
pub mod client;
pub mod codec;
pub mod error;
pub mod instructions;
pub mod state;

pub mod program {
    use solana_address::Address;

    /// `7JYPt6XXmADUzAG12ZM3763PuF7XhJmfr7oWV9g2VrcM`
    pub const ID: Address = Address::new_from_array([
        93, 164, 126, 65, 108, 159, 19, 108, 74, 162, 44, 46, 40, 188, 97, 25, 58, 126, 23, 63,
        153, 149, 13, 135, 7, 242, 84, 66, 116, 162, 97, 182,
    ]);

    #[inline(always)]
    pub fn check_id(id: &Address) -> bool {
        id == &ID
    }
}
