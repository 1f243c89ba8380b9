use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};
use starform::session::{KeyTracker, Session};

use crate::config::ReplayConfig;
use crate::io::output::ReplayStats;
use crate::script::ExtScript;

/// Plays a script against a [`Session`], one tick at a time.
pub struct Replayer {
    pub session: Session,
    pub config: ReplayConfig,
    keys: KeyTracker,
    stats: ReplayStats,
}

impl Replayer {
    /// Sets up a fresh session for the script. The viewport of the script takes precedence over the config's.
    pub fn new(script: &ExtScript, config: ReplayConfig) -> Result<Self> {
        let viewport = script.viewport.unwrap_or(config.viewport);
        let session = Session::from_viewport(&viewport)?
            .with_key_step(config.key_step)?
            .with_mode(script.mode);

        Ok(Self {
            session,
            config,
            keys: KeyTracker::new(),
            stats: ReplayStats::default(),
        })
    }

    /// Runs every tick of the script.
    /// `frame_sink` receives the session after every `frame_interval`-th tick.
    pub fn run(
        &mut self,
        script: &ExtScript,
        mut frame_sink: impl FnMut(u64, &Session) -> Result<()>,
    ) -> Result<ReplayStats> {
        let tick_interval = Duration::from_millis(self.config.tick_interval_ms);
        info!(
            "[REPLAY] running {} ticks (paced: {})",
            script.n_ticks(),
            self.config.pace_ticks
        );

        for ext_tick in &script.ticks {
            self.keys.release_all();
            ext_tick.held.iter().for_each(|k| self.keys.press(*k));

            for _ in 0..ext_tick.n_repeats() {
                let start = Instant::now();

                let snapshot = self.keys.snapshot();
                let report = self.session.tick(&snapshot, &ext_tick.commands);
                self.stats.register(&report);

                if let Some(interval) = self.config.frame_interval {
                    if (report.tick + 1) % interval as u64 == 0 {
                        frame_sink(report.tick, &self.session)?;
                    }
                }

                if self.config.pace_ticks {
                    if let Some(remaining) = tick_interval.checked_sub(start.elapsed()) {
                        std::thread::sleep(remaining);
                    }
                }
            }
        }
        self.keys.release_all();

        debug!("[REPLAY] finished: {:?}", self.stats);
        Ok(self.stats)
    }
}
