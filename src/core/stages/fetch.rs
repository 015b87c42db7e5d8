use crate::common::PC_STEP;
use crate::core::Cpu;
use crate::isa::{Instruction, Opcode};

/// Fetch stage.
///
/// Reads the instruction at the current PC into the F latch. While Decode
/// holds the stall bit the same instruction is re-presented and the PC does
/// not advance. The tick in which Execute redirects the PC is skipped via
/// `fetch_from_next_cycle`, so a taken branch's target is first sampled on
/// the following tick.
pub fn fetch_stage(cpu: &mut Cpu) {
    if !cpu.fetch.has_insn {
        // Stream ended by HALT; nothing more enters the pipeline.
        return;
    }

    if cpu.fetch_from_next_cycle {
        cpu.fetch_from_next_cycle = false;
        return;
    }

    cpu.fetch.pc = cpu.pc;
    cpu.fetch.insn = match cpu.code.at(cpu.pc) {
        Some(insn) => *insn,
        // PC walked past the last instruction without a HALT: drain the
        // pipeline as if one were present rather than read undefined code.
        None => Instruction::halt(),
    };

    if !cpu.fetch.stalled {
        cpu.pc += PC_STEP;
        cpu.decode = cpu.fetch;

        if cpu.fetch.insn.opcode == Opcode::Halt {
            cpu.fetch.has_insn = false;
        }
    }

    if cpu.trace {
        Cpu::print_stage("Fetch", &cpu.fetch);
    }
}
