#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::System;

/// Optional per-phase resource reporting for the CLI. Disabled instances
/// are free; every method is a no-op.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    state: Option<Mutex<MonitorState>>,
}

#[cfg(feature = "cli")]
struct MonitorState {
    system: System,
    pid: sysinfo::Pid,
    started: Instant,
    peak_memory_mb: u64,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let state = enabled.then(|| {
            let mut system = System::new_all();
            system.refresh_all();
            let pid = sysinfo::get_current_pid().expect("Failed to get current PID");
            Mutex::new(MonitorState {
                system,
                pid,
                started: Instant::now(),
                peak_memory_mb: 0,
            })
        });
        Self { state }
    }

    pub fn log_stats(&self, phase: &str) {
        let Some(state) = &self.state else {
            return;
        };
        let Ok(mut state) = state.lock() else {
            return;
        };
        state.system.refresh_all();

        let pid = state.pid;
        let Some(process) = state.system.process(pid) else {
            return;
        };
        let memory_mb = process.memory() / 1024 / 1024;
        let cpu = process.cpu_usage();
        let elapsed = state.started.elapsed();
        if memory_mb > state.peak_memory_mb {
            state.peak_memory_mb = memory_mb;
        }

        tracing::info!(
            "📊 {} - CPU: {:.1}%, Memory: {}MB, Time: {:?}",
            phase,
            cpu,
            memory_mb,
            elapsed
        );
    }

    pub fn log_final_stats(&self) {
        let Some(state) = &self.state else {
            return;
        };
        let Ok(state) = state.lock() else {
            return;
        };
        tracing::info!(
            "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
            state.started.elapsed(),
            state.peak_memory_mb
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_some()
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// No-op implementation for non-CLI builds
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
