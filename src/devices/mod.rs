//! Storage devices behind the drive memory map.
//!
//! - **Ram**: mutable, zero-filled working memory at the bottom of the address
//!   space (zero page and stack page included)
//! - **Firmware**: the immutable 16KB DOS image mapped at `$C000-$FFFF`
//!
//! Routing between them lives in [`crate::memory::DriveMemory`].

pub mod ram;
pub mod rom;

pub use ram::{Ram, STACK_PAGE, ZERO_PAGE};
pub use rom::{Firmware, FirmwareError, FIRMWARE_SIZE};
