//! Simulation statistics collection and reporting.
//!
//! Tracks cycle counts, retired instructions, stall causes, and the
//! instruction mix over a run.

use std::time::Instant;

use serde::Serialize;

/// Counters accumulated over a simulation run.
#[derive(Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Clock ticks elapsed.
    pub cycles: u64,
    /// Instructions retired through Writeback, HALT included.
    pub instructions_retired: u64,

    /// Ticks Decode spent stalled on a data hazard.
    pub stalls_data: u64,
    /// Cycles wasted by taken control transfers (two per flush).
    pub stalls_control: u64,
    /// Taken branches, jumps, and JALRs resolved in Execute.
    pub branches_taken: u64,

    /// Retired arithmetic, logical, compare, and MOVC instructions.
    pub inst_alu: u64,
    /// Retired LOAD and LOADP instructions.
    pub inst_load: u64,
    /// Retired STORE and STOREP instructions.
    pub inst_store: u64,
    /// Retired branches, JUMPs, and JALRs (taken or not).
    pub inst_branch: u64,
    /// Retired HALT and NOP instructions.
    pub inst_system: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stalls_data: 0,
            stalls_control: 0,
            branches_taken: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_system: 0,
        }
    }
}

impl SimStats {
    /// Prints a formatted summary of the run.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };

        let ipc = self.instructions_retired as f64 / cyc as f64;
        let cpi = cyc as f64 / instr as f64;

        println!("\n==========================================================");
        println!("APEX SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", ipc);
        println!("sim_cpi                  {:.4}", cpi);
        println!("----------------------------------------------------------");
        println!("CORE BREAKDOWN");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc as f64) * 100.0
        );
        println!(
            "  stalls.control         {} ({:.2}%)",
            self.stalls_control,
            (self.stalls_control as f64 / cyc as f64) * 100.0
        );
        println!("  branches.taken         {}", self.branches_taken);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let total = instr as f64;
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            (self.inst_alu as f64 / total) * 100.0
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            (self.inst_load as f64 / total) * 100.0
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            (self.inst_store as f64 / total) * 100.0
        );
        println!(
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            (self.inst_branch as f64 / total) * 100.0
        );
        println!(
            "  op.system              {} ({:.2}%)",
            self.inst_system,
            (self.inst_system as f64 / total) * 100.0
        );
        println!("==========================================================");
    }

    /// Serializes the counters as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
