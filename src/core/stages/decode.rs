use crate::core::Cpu;
use crate::isa::Opcode;

/// Decode/RF stage.
///
/// Checks the scoreboard for every source the instruction reads. If any is
/// busy the instruction stalls in place: both the F and D latches are marked
/// stalled, nothing propagates to Execute (X receives a bubble), and the
/// check repeats next tick. Once all sources are free the operands are
/// snapshotted from the register file, the destinations are reserved, and
/// the latch propagates D -> X.
pub fn decode_stage(cpu: &mut Cpu) {
    if !cpu.decode.has_insn {
        return;
    }

    if cpu.trace {
        Cpu::print_stage("Decode/RF", &cpu.decode);
    }

    let insn = cpu.decode.insn;
    let ready = match insn.opcode {
        // Three-register ALU ops and CMP read rs1 and rs2.
        Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::Div
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Cmp => cpu.scoreboard.is_free(insn.rs1) && cpu.scoreboard.is_free(insn.rs2),
        // Register-immediate ops, loads, compares-with-literal, and
        // register-indirect jumps read rs1 only.
        Opcode::Addl
        | Opcode::Subl
        | Opcode::Jalr
        | Opcode::Jump
        | Opcode::Load
        | Opcode::Loadp
        | Opcode::Cml => cpu.scoreboard.is_free(insn.rs1),
        // Stores read the value (rs1) and the base (rs2).
        Opcode::Store | Opcode::Storep => {
            cpu.scoreboard.is_free(insn.rs1) && cpu.scoreboard.is_free(insn.rs2)
        }
        // No register sources: always issue.
        Opcode::Movc
        | Opcode::Bz
        | Opcode::Bnz
        | Opcode::Bp
        | Opcode::Bnp
        | Opcode::Bn
        | Opcode::Bnn
        | Opcode::Halt
        | Opcode::Nop => true,
    };

    if !ready {
        cpu.decode.stalled = true;
        cpu.fetch.stalled = true;
        cpu.stats.stalls_data += 1;
        return;
    }

    match insn.opcode {
        Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::Div
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Cmp
        | Opcode::Store
        | Opcode::Storep => {
            cpu.decode.rs1_value = cpu.regs.read(insn.rs1);
            cpu.decode.rs2_value = cpu.regs.read(insn.rs2);
        }
        Opcode::Addl
        | Opcode::Subl
        | Opcode::Jalr
        | Opcode::Jump
        | Opcode::Load
        | Opcode::Loadp
        | Opcode::Cml => {
            cpu.decode.rs1_value = cpu.regs.read(insn.rs1);
        }
        _ => {}
    }

    if insn.opcode.writes_rd() {
        cpu.scoreboard.acquire(insn.rd);
    }
    // The post-increment variants also write back a base register.
    if insn.opcode == Opcode::Loadp {
        cpu.scoreboard.acquire(insn.rs1);
    }
    if insn.opcode == Opcode::Storep {
        cpu.scoreboard.acquire(insn.rs2);
    }

    cpu.decode.stalled = false;
    cpu.fetch.stalled = false;
    cpu.execute = cpu.decode;
    // The slot is refilled by Fetch later this tick, or stays a bubble once
    // the instruction stream has ended.
    cpu.decode.has_insn = false;
}
