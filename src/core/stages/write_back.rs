use crate::core::Cpu;
use crate::isa::Opcode;

/// Writeback stage.
///
/// Commits results to the register file, releases scoreboard reservations,
/// and counts the retirement. Returns `true` when the retiring instruction
/// is HALT, which stops the simulator.
pub fn wb_stage(cpu: &mut Cpu) -> bool {
    if !cpu.writeback.has_insn {
        return false;
    }

    if cpu.trace {
        Cpu::print_stage("Writeback", &cpu.writeback);
    }

    let w = cpu.writeback;
    match w.insn.opcode {
        Opcode::Add
        | Opcode::Addl
        | Opcode::Sub
        | Opcode::Subl
        | Opcode::Mul
        | Opcode::Div
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Movc
        | Opcode::Load
        | Opcode::Jalr => {
            cpu.regs.write(w.insn.rd, w.result_buffer);
            cpu.scoreboard.release(w.insn.rd);
        }
        Opcode::Loadp => {
            cpu.regs.write(w.insn.rd, w.result_buffer);
            cpu.regs.write(w.insn.rs1, w.rs1_value);
            cpu.scoreboard.release(w.insn.rd);
            cpu.scoreboard.release(w.insn.rs1);
        }
        Opcode::Storep => {
            cpu.regs.write(w.insn.rs2, w.rs2_value);
            cpu.scoreboard.release(w.insn.rs2);
        }
        Opcode::Store
        | Opcode::Cmp
        | Opcode::Cml
        | Opcode::Bz
        | Opcode::Bnz
        | Opcode::Bp
        | Opcode::Bnp
        | Opcode::Bn
        | Opcode::Bnn
        | Opcode::Jump
        | Opcode::Halt
        | Opcode::Nop => {}
    }

    cpu.stats.instructions_retired += 1;
    match w.insn.opcode {
        Opcode::Load | Opcode::Loadp => cpu.stats.inst_load += 1,
        Opcode::Store | Opcode::Storep => cpu.stats.inst_store += 1,
        Opcode::Bz
        | Opcode::Bnz
        | Opcode::Bp
        | Opcode::Bnp
        | Opcode::Bn
        | Opcode::Bnn
        | Opcode::Jump
        | Opcode::Jalr => cpu.stats.inst_branch += 1,
        Opcode::Halt | Opcode::Nop => cpu.stats.inst_system += 1,
        _ => cpu.stats.inst_alu += 1,
    }

    cpu.writeback.has_insn = false;
    w.insn.opcode == Opcode::Halt
}
