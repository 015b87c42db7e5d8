use crate::common::{PC_BASE, SimError};
use crate::config::Config;
use crate::core::arch::{ConditionCodes, RegisterFile};
use crate::core::memory::{CodeMemory, DataMemory};
use crate::core::pipeline::{Scoreboard, StageLatch};
use crate::core::stages;
use crate::isa::Instruction;
use crate::stats::SimStats;

/// Outcome of a single clock tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The pipeline is still in flight.
    Running,
    /// A HALT retired in Writeback this tick.
    Halted,
}

/// Why a multi-tick run returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// A HALT retired in Writeback.
    Halted,
    /// The requested number of cycles elapsed first.
    CycleLimit,
}

/// The APEX processor: architectural state, pipeline latches, and the tick
/// driver.
///
/// Stages receive the whole aggregate by mutable borrow; there is no global
/// state. Within a tick the driver calls the stages in reverse pipeline
/// order (Writeback first, Fetch last) so each stage consumes its input
/// latch before the upstream stage refills it.
pub struct Cpu {
    /// Program counter; always a multiple of 4 and >= the code base.
    pub pc: i32,
    /// Clock ticks elapsed, counting the tick in progress.
    pub clock: u64,
    /// Architectural registers R0..R15.
    pub regs: RegisterFile,
    /// Condition codes, updated at Execute by arithmetic and compare ops.
    pub cc: ConditionCodes,
    /// Per-register in-flight-writer scoreboard.
    pub scoreboard: Scoreboard,
    /// Loaded program.
    pub code: CodeMemory,
    /// Data memory and store-touched address record.
    pub data: DataMemory,
    /// Fetch output latch (F/D boundary input side).
    pub fetch: StageLatch,
    /// Decode input latch.
    pub decode: StageLatch,
    /// Execute input latch.
    pub execute: StageLatch,
    /// Memory input latch.
    pub memory: StageLatch,
    /// Writeback input latch.
    pub writeback: StageLatch,
    /// One-shot redirect signal: set by Execute on a taken control transfer
    /// so Fetch skips the redirect tick and first samples the new PC on the
    /// following tick.
    pub fetch_from_next_cycle: bool,
    /// Per-cycle trace printing.
    pub trace: bool,
    /// Cycle, retirement, and stall statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Builds a CPU around a loaded program.
    pub fn new(program: Vec<Instruction>, config: &Config) -> Self {
        Self {
            pc: PC_BASE,
            clock: 0,
            regs: RegisterFile::new(),
            cc: ConditionCodes::default(),
            scoreboard: Scoreboard::new(),
            code: CodeMemory::new(program),
            data: DataMemory::new(config.memory.data_memory_size),
            fetch: StageLatch {
                has_insn: true,
                ..StageLatch::bubble()
            },
            decode: StageLatch::bubble(),
            execute: StageLatch::bubble(),
            memory: StageLatch::bubble(),
            writeback: StageLatch::bubble(),
            fetch_from_next_cycle: false,
            trace: cfg!(feature = "always-trace") || config.general.trace_stages,
            stats: SimStats::default(),
        }
    }

    /// Advances the processor by one clock tick.
    ///
    /// Stages run Writeback -> Memory -> Execute -> Decode -> Fetch; if the
    /// instruction retiring in Writeback is HALT the remaining stages are
    /// skipped and the tick reports [`TickOutcome::Halted`].
    pub fn tick(&mut self) -> Result<TickOutcome, SimError> {
        self.clock += 1;
        self.stats.cycles += 1;

        if self.trace {
            println!("--------------------------------------------");
            println!("Clock Cycle #: {}", self.clock);
            println!("--------------------------------------------");
        }

        if stages::write_back::wb_stage(self) {
            return Ok(TickOutcome::Halted);
        }

        stages::memory_access::mem_stage(self)?;
        stages::execute::execute_stage(self)?;
        stages::decode::decode_stage(self);
        stages::fetch::fetch_stage(self);

        if self.trace {
            self.print_arch_state();
        }

        Ok(TickOutcome::Running)
    }

    /// Runs until a HALT retires.
    pub fn run(&mut self) -> Result<StopReason, SimError> {
        loop {
            if self.tick()? == TickOutcome::Halted {
                return Ok(StopReason::Halted);
            }
        }
    }

    /// Runs for up to `cycles` ticks, stopping early on HALT.
    pub fn simulate(&mut self, cycles: u64) -> Result<StopReason, SimError> {
        for _ in 0..cycles {
            if self.tick()? == TickOutcome::Halted {
                return Ok(StopReason::Halted);
            }
        }
        Ok(StopReason::CycleLimit)
    }

    /// Prints one stage's latch content in the per-cycle trace format.
    pub(crate) fn print_stage(name: &str, latch: &StageLatch) {
        println!("{:<12}: pc({}) {}", name, latch.pc, latch.insn);
    }

    /// Prints the register file, condition flags, and store-touched memory.
    pub fn print_arch_state(&self) {
        println!("----------");
        println!("Registers:");
        println!("----------");
        self.regs.dump();
        println!("----------");
        println!("Flags:");
        println!("----------");
        println!("Z = {}  P = {}  N = {}", self.cc.z as u8, self.cc.p as u8, self.cc.n as u8);
        println!("----------");
        println!("Memory:");
        println!("----------");
        for &addr in self.data.touched() {
            if let Some(val) = self.data.read(addr) {
                println!("MEM[{}] = {}", addr, val);
            }
        }
        println!();
    }
}
