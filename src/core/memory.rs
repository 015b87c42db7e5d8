//! Code and data memories.

use crate::common::{PC_BASE, PC_STEP};
use crate::isa::Instruction;

/// Read-only instruction memory, indexed by PC.
pub struct CodeMemory {
    insns: Vec<Instruction>,
}

impl CodeMemory {
    /// Wraps a loaded program; the first instruction lives at [`PC_BASE`].
    pub fn new(insns: Vec<Instruction>) -> Self {
        Self { insns }
    }

    /// Instruction at `pc`, or `None` once the PC walks past the program.
    pub fn at(&self, pc: i32) -> Option<&Instruction> {
        let idx = (pc - PC_BASE) / PC_STEP;
        usize::try_from(idx).ok().and_then(|i| self.insns.get(i))
    }

    /// Number of instructions loaded.
    pub fn len(&self) -> usize {
        self.insns.len()
    }

    /// True when no instructions are loaded.
    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// Iterates the program in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.insns.iter()
    }
}

/// Flat data memory plus the record of store-touched addresses.
///
/// Addresses index words directly; accessors bounds-check and return `None`
/// so the Memory stage can attach the faulting PC to the error it raises.
pub struct DataMemory {
    words: Vec<i32>,
    touched: Vec<i32>,
}

impl DataMemory {
    /// Creates a zeroed data memory of `size` words.
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; size],
            touched: Vec::new(),
        }
    }

    /// Reads the word at `addr`, or `None` when out of range.
    pub fn read(&self, addr: i32) -> Option<i32> {
        usize::try_from(addr).ok().and_then(|a| self.words.get(a)).copied()
    }

    /// Writes the word at `addr`; `None` when out of range.
    pub fn write(&mut self, addr: i32, val: i32) -> Option<()> {
        let slot = usize::try_from(addr).ok().and_then(|a| self.words.get_mut(a))?;
        *slot = val;
        Some(())
    }

    /// Records `addr` as touched by a store, preserving first-store order.
    pub fn record_store(&mut self, addr: i32) {
        if !self.touched.contains(&addr) {
            self.touched.push(addr);
        }
    }

    /// Addresses touched by stores, in first-store order.
    pub fn touched(&self) -> &[i32] {
        &self.touched
    }
}
