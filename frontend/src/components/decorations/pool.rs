/// Budget for one particle kind.
#[derive(Clone, Copy, Debug)]
pub struct PoolConfig {
    /// Most particles of this kind alive at once.
    pub capacity: usize,
    /// Smallest gap between two spawns, zero for cadence-driven pools.
    pub min_spawn_gap_ms: f64,
    /// How long after spawning the particle is torn down.
    pub removal_delay_ms: u32,
}

/// Occupancy and cadence accounting for one particle kind.
///
/// Pure bookkeeping over caller-supplied timestamps. The engine asks
/// [`Pool::try_admit`] before creating an element and calls
/// [`Pool::release`] once it is torn down.
pub struct Pool {
    config: PoolConfig,
    occupancy: usize,
    last_spawn_ms: Option<f64>,
}

impl Pool {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            occupancy: 0,
            last_spawn_ms: None,
        }
    }

    /// Claim a slot at `now_ms`. A refusal means skip this tick, never queue.
    pub fn try_admit(&mut self, now_ms: f64) -> bool {
        if self.occupancy >= self.config.capacity {
            return false;
        }

        if let Some(last) = self.last_spawn_ms {
            if now_ms - last < self.config.min_spawn_gap_ms {
                return false;
            }
        }

        self.occupancy += 1;
        self.last_spawn_ms = Some(now_ms);
        true
    }

    pub fn release(&mut self) {
        self.occupancy = self.occupancy.saturating_sub(1);
    }

    /// Forget everything, the next run starts from a clean slate.
    pub fn reset(&mut self) {
        self.occupancy = 0;
        self.last_spawn_ms = None;
    }

    pub fn occupancy(&self) -> usize {
        self.occupancy
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}
