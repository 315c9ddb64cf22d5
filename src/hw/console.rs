// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! JTAG UART debug console.
//!
//! Output is best effort. The UART reports its free TX FIFO space in the upper half of the
//! control register; when nothing on the host side drains the FIFO that space stays at zero, so
//! bytes that don't fit are dropped instead of waited for. The control loop never stalls on a
//! log line.

use core::convert::Infallible;
use core::fmt;

use super::regs::{Register, RegisterAccess};

/// Write-space field of the control register.
const WSPACE_SHIFT: u32 = 16;

pub struct Console<R: RegisterAccess> {
    regs: R,
    dropped: usize,
}

impl<R: RegisterAccess> Console<R> {
    pub fn new(regs: R) -> Self {
        Self { regs, dropped: 0 }
    }

    pub fn free(self) -> R {
        self.regs
    }

    /// Bytes discarded so far because the FIFO was full.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Queue one byte, or `WouldBlock` if the TX FIFO is full.
    pub fn try_write_byte(&mut self, b: u8) -> nb::Result<(), Infallible> {
        let space = self.regs.read(Register::ConsoleControl) >> WSPACE_SHIFT;
        if space == 0 {
            return Err(nb::Error::WouldBlock);
        }
        self.regs.write(Register::ConsoleData, b as u32);
        Ok(())
    }

    /// Write as much of `s` as fits. Once the FIFO fills, the rest of `s` is dropped.
    ///
    /// Returns the number of bytes queued.
    pub fn write_lossy(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        for (i, &b) in bytes.iter().enumerate() {
            if self.try_write_byte(b).is_err() {
                self.dropped += bytes.len() - i;
                return i;
            }
        }
        bytes.len()
    }
}

// Lets the logger use `write!`. Never reports an error, a full FIFO just loses text.
impl<R: RegisterAccess> fmt::Write for Console<R> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_lossy(s);
        Ok(())
    }
}
