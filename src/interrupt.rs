//! Interrupt controller bit layout and dispatch priority.
//!
//! The 0xFF0F (IF) and 0xFFFF (IE) registers are not backed by a
//! dedicated struct: each source of interrupts owns its own pending
//! flag (`Ppu::int_vblank`, `Ppu::int_stat`, `Timer::int_tima`,
//! `Pad::int_pad`) and the [`crate::mmu::Mmu`] synthesizes the IF byte
//! by OR-ing them together on read, and distributes a write back out
//! to the same flags. This module only fixes the bit layout and the
//! priority order the CPU must honour, so both sides agree on them.

/// V-Blank, bit 0, vector 0x40. Highest priority.
pub const VBLANK: u8 = 0x01;
/// LCD STAT, bit 1, vector 0x48.
pub const LCD_STAT: u8 = 0x02;
/// Timer overflow, bit 2, vector 0x50.
pub const TIMER: u8 = 0x04;
/// Joypad edge, bit 4, vector 0x60. Lowest priority.
///
/// Bit 3 (serial) is part of the real hardware's IF/IE layout but has
/// no source in this core (serial link is a non-goal) and is always 0.
pub const JOYPAD: u8 = 0x10;

/// Priority order in which pending, enabled interrupts are serviced:
/// lowest bit first.
pub const PRIORITY: [u8; 4] = [VBLANK, LCD_STAT, TIMER, JOYPAD];

/// Service vector for each bit in [`PRIORITY`].
pub fn vector(bit: u8) -> u16 {
    match bit {
        VBLANK => 0x40,
        LCD_STAT => 0x48,
        TIMER => 0x50,
        JOYPAD => 0x60,
        _ => unreachable!("not an interrupt bit: 0x{bit:02x}"),
    }
}

/// Picks the highest-priority bit set in both `pending` (IF) and
/// `enabled` (IE), if any.
pub fn next_pending(pending: u8, enabled: u8) -> Option<u8> {
    let active = pending & enabled;
    PRIORITY.into_iter().find(|&bit| active & bit == bit)
}
