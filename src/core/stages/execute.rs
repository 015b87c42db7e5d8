use crate::common::{PC_BASE, PC_STEP, SimError};
use crate::core::Cpu;
use crate::isa::Opcode;

/// Redirects the PC after a taken control transfer resolved in Execute.
///
/// The instruction sitting in D was fetched on the wrong path and is
/// invalidated. Fetch runs after Execute this tick and would otherwise pull
/// from the new PC immediately; `fetch_from_next_cycle` suppresses that so
/// the target is first sampled next tick, giving the fixed two-cycle taken
/// penalty. Fetch is re-enabled because the transfer may precede a HALT
/// that already shut it down, and any pending stall is moot once the
/// stalled instruction is off the path.
fn redirect(cpu: &mut Cpu, target: i32) -> Result<(), SimError> {
    if target < PC_BASE || target % PC_STEP != 0 {
        return Err(SimError::InvalidJumpTarget {
            pc: cpu.execute.pc,
            target,
        });
    }

    cpu.pc = target;
    cpu.fetch_from_next_cycle = true;
    cpu.decode.has_insn = false;
    cpu.decode.stalled = false;
    cpu.fetch.stalled = false;
    cpu.fetch.has_insn = true;
    cpu.stats.branches_taken += 1;
    cpu.stats.stalls_control += 2;
    Ok(())
}

/// Execute stage.
///
/// Computes ALU results and effective addresses, updates the condition
/// codes for arithmetic and compare opcodes, and resolves control
/// transfers. The X latch always propagates to M at the end of the tick.
pub fn execute_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    if !cpu.execute.has_insn {
        return Ok(());
    }

    if cpu.trace {
        Cpu::print_stage("Execute", &cpu.execute);
    }

    let x = cpu.execute;
    match x.insn.opcode {
        Opcode::Add => {
            let r = x.rs1_value.wrapping_add(x.rs2_value);
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Addl => {
            let r = x.rs1_value.wrapping_add(x.insn.imm);
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Sub => {
            let r = x.rs1_value.wrapping_sub(x.rs2_value);
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Subl => {
            let r = x.rs1_value.wrapping_sub(x.insn.imm);
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Mul => {
            let r = x.rs1_value.wrapping_mul(x.rs2_value);
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Div => {
            if x.rs2_value == 0 {
                return Err(SimError::DivisionByZero { pc: x.pc });
            }
            let r = x.rs1_value.wrapping_div(x.rs2_value);
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::And => {
            let r = x.rs1_value & x.rs2_value;
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Or => {
            let r = x.rs1_value | x.rs2_value;
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Xor => {
            let r = x.rs1_value ^ x.rs2_value;
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Movc => {
            // MOVC deliberately leaves the condition codes unchanged.
            cpu.execute.result_buffer = x.insn.imm;
        }
        Opcode::Load => {
            cpu.execute.memory_address = x.rs1_value.wrapping_add(x.insn.imm);
        }
        Opcode::Loadp => {
            cpu.execute.memory_address = x.rs1_value.wrapping_add(x.insn.imm);
            // New base rides in rs1_value until Writeback stores it to rs1.
            cpu.execute.rs1_value = x.rs1_value.wrapping_add(PC_STEP);
        }
        Opcode::Store => {
            let addr = x.rs2_value.wrapping_add(x.insn.imm);
            cpu.execute.memory_address = addr;
            cpu.data.record_store(addr);
        }
        Opcode::Storep => {
            let addr = x.rs2_value.wrapping_add(x.insn.imm);
            cpu.execute.memory_address = addr;
            cpu.execute.rs2_value = x.rs2_value.wrapping_add(PC_STEP);
            cpu.data.record_store(addr);
        }
        Opcode::Cmp => {
            let r = x.rs1_value.wrapping_sub(x.rs2_value);
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Cml => {
            let r = x.rs1_value.wrapping_sub(x.insn.imm);
            cpu.execute.result_buffer = r;
            cpu.cc.update(r);
        }
        Opcode::Bz
        | Opcode::Bnz
        | Opcode::Bp
        | Opcode::Bnp
        | Opcode::Bn
        | Opcode::Bnn => {
            let taken = match x.insn.opcode {
                Opcode::Bz => cpu.cc.z,
                Opcode::Bnz => !cpu.cc.z,
                Opcode::Bp => cpu.cc.p,
                Opcode::Bnp => !cpu.cc.p,
                Opcode::Bn => cpu.cc.n,
                _ => !cpu.cc.n,
            };
            if taken {
                redirect(cpu, x.pc.wrapping_add(x.insn.imm))?;
            }
        }
        Opcode::Jump => {
            redirect(cpu, x.rs1_value.wrapping_add(x.insn.imm))?;
        }
        Opcode::Jalr => {
            cpu.execute.result_buffer = x.pc + PC_STEP;
            redirect(cpu, x.rs1_value.wrapping_add(x.insn.imm))?;
        }
        Opcode::Halt | Opcode::Nop => {}
    }

    cpu.memory = cpu.execute;
    cpu.execute.has_insn = false;
    Ok(())
}
