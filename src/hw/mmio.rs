// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Volatile memory-mapped register backend used on the target.

use super::regs::{Register, RegisterAccess, RegisterMap};

/// Direct volatile access to the peripherals described by a [`RegisterMap`].
pub struct Mmio {
    map: RegisterMap,
}

impl Mmio {
    /// Bind to the peripherals at `map`.
    ///
    /// # Safety
    ///
    /// Every address in `map` must be a valid, word-aligned device register for the lifetime of
    /// the returned value, and nothing else may access those registers concurrently.
    pub unsafe fn new(map: RegisterMap) -> Self {
        Self { map }
    }

    #[inline]
    pub fn map(&self) -> &RegisterMap {
        &self.map
    }
}

impl RegisterAccess for Mmio {
    #[inline]
    fn read(&mut self, reg: Register) -> u32 {
        match self.map.address(reg) {
            // SAFETY: address validity is the contract of `Mmio::new`.
            Some(addr) => unsafe { core::ptr::read_volatile(addr as *const u32) },
            None => 0,
        }
    }

    #[inline]
    fn write(&mut self, reg: Register, value: u32) {
        if let Some(addr) = self.map.address(reg) {
            // SAFETY: address validity is the contract of `Mmio::new`.
            unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
        }
    }
}
