//! Tests for the text-assembly program loader.

use apex_emulator::common::LoadError;
use apex_emulator::isa::Opcode;
use apex_emulator::sim::loader::parse_program;

/// Tests parsing of every operand shape.
#[test]
fn test_parse_all_shapes() {
    let src = "\
ADD R3,R1,R2
ADDL R4,R3,#10
MOVC R1,#5
LOAD R2,R1,#0
STORE R1,R2,#4
BZ #8
CMP R1,R2
CML R1,#0
JUMP R3,#0
JALR R15,R3,#0
NOP
HALT
";
    let program = parse_program(src).expect("program parses");
    assert_eq!(program.len(), 12);

    let add = program[0];
    assert_eq!(add.opcode, Opcode::Add);
    assert_eq!((add.rd, add.rs1, add.rs2), (3, 1, 2));

    let addl = program[1];
    assert_eq!(addl.opcode, Opcode::Addl);
    assert_eq!((addl.rd, addl.rs1, addl.imm), (4, 3, 10));

    let store = program[4];
    assert_eq!(store.opcode, Opcode::Store);
    assert_eq!((store.rs1, store.rs2, store.imm), (1, 2, 4));

    let bz = program[5];
    assert_eq!(bz.opcode, Opcode::Bz);
    assert_eq!(bz.imm, 8);

    assert_eq!(program[11].opcode, Opcode::Halt);
}

/// Tests mnemonic case-insensitivity and flexible separators.
#[test]
fn test_parse_flexible_syntax() {
    let program = parse_program("add r3, r1, r2\nmovc R1 #5\nhalt\n").expect("parses");
    assert_eq!(program[0].opcode, Opcode::Add);
    assert_eq!(program[1].imm, 5);
}

/// Tests negative immediates.
#[test]
fn test_parse_negative_immediate() {
    let program = parse_program("MOVC R1,#-7\nHALT\n").expect("parses");
    assert_eq!(program[0].imm, -7);
}

/// Tests that blank lines and comments are skipped.
#[test]
fn test_parse_skips_blanks_and_comments() {
    let src = "\n; setup\nMOVC R1,#1\n\n; done\nHALT\n";
    let program = parse_program(src).expect("parses");
    assert_eq!(program.len(), 2);
}

/// Tests rejection of unknown mnemonics.
#[test]
fn test_reject_unknown_mnemonic() {
    let err = parse_program("FOO R1,R2,R3\n").unwrap_err();
    assert!(matches!(err, LoadError::UnknownMnemonic { line: 1, .. }));
}

/// Tests rejection of wrong operand counts.
#[test]
fn test_reject_operand_count() {
    let err = parse_program("ADD R1,R2\nHALT\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::OperandCount {
            line: 1,
            expected: 3,
            found: 2
        }
    ));

    let err = parse_program("HALT R1\n").unwrap_err();
    assert!(matches!(err, LoadError::OperandCount { expected: 0, .. }));
}

/// Tests rejection of out-of-range register indices.
#[test]
fn test_reject_register_out_of_range() {
    let err = parse_program("MOVC R16,#1\nHALT\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::RegisterOutOfRange { line: 1, index: 16 }
    ));
}

/// Tests rejection of malformed operands.
#[test]
fn test_reject_malformed_operand() {
    let err = parse_program("ADD R1,R2,5\nHALT\n").unwrap_err();
    assert!(matches!(err, LoadError::MalformedOperand { line: 1, .. }));

    let err = parse_program("MOVC R1,5\nHALT\n").unwrap_err();
    assert!(matches!(err, LoadError::MalformedOperand { .. }));
}

/// Tests rejection of branch targets outside code memory.
#[test]
fn test_reject_branch_target_out_of_range() {
    // Forward past the end.
    let err = parse_program("BZ #100\nHALT\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::BranchTargetOutOfRange { line: 1, target: 4100 }
    ));

    // Backward past the origin.
    let err = parse_program("BZ #-8\nHALT\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::BranchTargetOutOfRange { target: 3992, .. }
    ));

    // Misaligned.
    let err = parse_program("NOP\nBZ #6\nHALT\n").unwrap_err();
    assert!(matches!(err, LoadError::BranchTargetOutOfRange { line: 2, .. }));
}

/// Tests that an in-range branch target is accepted.
#[test]
fn test_accept_branch_target_in_range() {
    parse_program("BZ #8\nNOP\nHALT\n").expect("branch to last instruction is valid");
}

/// Tests rejection of an empty program.
#[test]
fn test_reject_empty_program() {
    assert!(matches!(
        parse_program("; only a comment\n\n").unwrap_err(),
        LoadError::EmptyProgram
    ));
}
