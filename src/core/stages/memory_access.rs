use crate::common::SimError;
use crate::core::Cpu;
use crate::isa::Opcode;

/// Memory stage.
///
/// Loads read the addressed data-memory word into the result buffer; stores
/// write the value operand to it. Everything else passes through. The M
/// latch always propagates to W at the end of the tick.
pub fn mem_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    if !cpu.memory.has_insn {
        return Ok(());
    }

    if cpu.trace {
        Cpu::print_stage("Memory", &cpu.memory);
    }

    let m = cpu.memory;
    match m.insn.opcode {
        Opcode::Load | Opcode::Loadp => {
            cpu.memory.result_buffer =
                cpu.data
                    .read(m.memory_address)
                    .ok_or(SimError::DataAddressOutOfRange {
                        pc: m.pc,
                        address: m.memory_address,
                    })?;
        }
        Opcode::Store | Opcode::Storep => {
            cpu.data
                .write(m.memory_address, m.rs1_value)
                .ok_or(SimError::DataAddressOutOfRange {
                    pc: m.pc,
                    address: m.memory_address,
                })?;
        }
        _ => {}
    }

    cpu.writeback = cpu.memory;
    cpu.memory.has_insn = false;
    Ok(())
}
