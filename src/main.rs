/*!
 * rt-priority probe
 *
 * Initializes the priority scheduler from the environment, applies the
 * requested abstract priority to its own thread and prints a JSON report.
 *
 * Usage: rt-priority-probe [PRIORITY]
 */

use miette::{miette, IntoDiagnostic, Result};
use rt_priority::{
    current_host_tid, init_tracing, AbstractPriority, PriorityScheduler, ProcessSchedulingState,
    SchedulerStats, SchedulingDecision, ThreadRef,
};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct Report<'a> {
    backend: &'static str,
    state: &'a ProcessSchedulingState,
    thread: ThreadRef,
    priority: AbstractPriority,
    decision: Option<SchedulingDecision>,
    stats: SchedulerStats,
}

fn main() -> Result<()> {
    init_tracing();

    let priority = match std::env::args().nth(1) {
        Some(arg) => AbstractPriority::from_str(&arg).map_err(|e| miette!("{}", e))?,
        None => AbstractPriority::NORMAL,
    };

    let scheduler = PriorityScheduler::from_env();
    let tid = current_host_tid();
    let thread = ThreadRef(u32::try_from(tid).into_diagnostic()?);

    info!(%thread, %priority, "applying priority to probe thread");
    scheduler.apply(thread, priority);

    let report = Report {
        backend: scheduler.backend_name(),
        state: scheduler.state(),
        thread,
        priority,
        decision: scheduler.decision_for(priority),
        stats: scheduler.stats(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).into_diagnostic()?
    );

    Ok(())
}
