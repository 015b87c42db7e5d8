//! Tests for Execute-stage semantics: ALU results, condition codes, and
//! fatal faults.

use apex_emulator::common::SimError;
use apex_emulator::config::Config;
use apex_emulator::core::Cpu;
use apex_emulator::sim::loader::parse_program;

/// Builds a CPU for a program with tracing off.
fn build(src: &str) -> Cpu {
    let program = parse_program(src).expect("program parses");
    let config = Config::default();
    let mut cpu = Cpu::new(program, &config);
    cpu.trace = false;
    cpu
}

/// Runs a program to halt and returns the CPU.
fn run(src: &str) -> Cpu {
    let mut cpu = build(src);
    cpu.run().expect("program halts cleanly");
    cpu
}

/// Tests three-register ALU results.
#[test]
fn test_alu_three_register_ops() {
    let cpu = run("\
MOVC R1,#12
MOVC R2,#10
ADD R3,R1,R2
SUB R4,R1,R2
MUL R5,R1,R2
AND R6,R1,R2
OR R7,R1,R2
XOR R8,R1,R2
HALT
");
    assert_eq!(cpu.regs.read(3), 22);
    assert_eq!(cpu.regs.read(4), 2);
    assert_eq!(cpu.regs.read(5), 120);
    assert_eq!(cpu.regs.read(6), 12 & 10);
    assert_eq!(cpu.regs.read(7), 12 | 10);
    assert_eq!(cpu.regs.read(8), 12 ^ 10);
}

/// Tests register-immediate ALU results.
#[test]
fn test_alu_immediate_ops() {
    let cpu = run("\
MOVC R1,#10
ADDL R2,R1,#7
SUBL R3,R1,#4
HALT
");
    assert_eq!(cpu.regs.read(2), 17);
    assert_eq!(cpu.regs.read(3), 6);
}

/// Tests signed division and its flag update.
#[test]
fn test_div() {
    let cpu = run("\
MOVC R1,#-12
MOVC R2,#4
DIV R3,R1,R2
HALT
");
    assert_eq!(cpu.regs.read(3), -3);
    assert!(cpu.cc.n, "negative quotient sets n");
    assert!(!cpu.cc.z && !cpu.cc.p);
}

/// Tests that division by zero is a fatal simulation fault.
#[test]
fn test_div_by_zero_faults() {
    let mut cpu = build("\
MOVC R1,#5
DIV R3,R1,R0
HALT
");
    let err = cpu.run().unwrap_err();
    assert!(matches!(err, SimError::DivisionByZero { .. }));
}

/// Tests flag updates from arithmetic results of each sign.
#[test]
fn test_flags_follow_last_result() {
    let cpu = run("\
MOVC R1,#5
SUBL R2,R1,#5
HALT
");
    assert!(cpu.cc.z, "5 - 5 sets z");
    assert!(!cpu.cc.p && !cpu.cc.n);

    let cpu = run("\
MOVC R1,#5
SUBL R2,R1,#9
HALT
");
    assert!(cpu.cc.n, "5 - 9 sets n");

    let cpu = run("\
MOVC R1,#5
ADDL R2,R1,#1
HALT
");
    assert!(cpu.cc.p, "5 + 1 sets p");
}

/// Tests that MOVC leaves the condition codes unchanged.
#[test]
fn test_movc_preserves_flags() {
    let cpu = run("\
MOVC R1,#5
SUBL R2,R1,#5
MOVC R3,#-1
HALT
");
    assert!(cpu.cc.z, "flags still reflect the SUBL, not the MOVC");
}

/// Tests CMP flag results against both orderings.
#[test]
fn test_cmp_flags() {
    let cpu = run("\
MOVC R1,#3
MOVC R2,#5
CMP R1,R2
HALT
");
    assert!(cpu.cc.n, "3 - 5 is negative");

    let cpu = run("\
MOVC R1,#5
MOVC R2,#5
CMP R1,R2
HALT
");
    assert!(cpu.cc.z);
}

/// Tests CML against a literal.
#[test]
fn test_cml_flags() {
    let cpu = run("\
MOVC R1,#7
CML R1,#3
HALT
");
    assert!(cpu.cc.p, "7 - 3 is positive");
}

/// Tests that compares write no register.
#[test]
fn test_compare_writes_no_register() {
    let cpu = run("\
MOVC R1,#7
CML R1,#3
CMP R1,R1
HALT
");
    for i in 2..16 {
        assert_eq!(cpu.regs.read(i), 0);
    }
}

/// Tests that a store to an out-of-range address is a fatal fault.
#[test]
fn test_store_out_of_range_faults() {
    let mut cpu = build("\
MOVC R1,#5
STORE R1,R1,#9999
HALT
");
    let err = cpu.run().unwrap_err();
    assert!(matches!(
        err,
        SimError::DataAddressOutOfRange { address: 10004, .. }
    ));
}

/// Tests that a load from a negative address is a fatal fault.
#[test]
fn test_load_negative_address_faults() {
    let mut cpu = build("\
LOAD R2,R0,#-4
HALT
");
    let err = cpu.run().unwrap_err();
    assert!(matches!(
        err,
        SimError::DataAddressOutOfRange { address: -4, .. }
    ));
}

/// Tests that a register-indirect jump below the code base is a fatal fault.
#[test]
fn test_jump_below_code_base_faults() {
    let mut cpu = build("\
MOVC R1,#2
JUMP R1,#0
HALT
");
    let err = cpu.run().unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidJumpTarget { target: 2, .. }
    ));
}

/// Tests that a misaligned register-indirect jump is a fatal fault.
#[test]
fn test_jump_misaligned_faults() {
    let mut cpu = build("\
MOVC R1,#4002
JUMP R1,#0
HALT
");
    let err = cpu.run().unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidJumpTarget { target: 4002, .. }
    ));
}
