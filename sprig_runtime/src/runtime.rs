use ahash::AHashMap;
use log::debug;
use sprig_ids::NodeID;
use sprig_nodes::{NodeArena, SceneNode};
use sprig_project::ProjectConfig;
use sprig_structs::{Camera2D, Viewport};
use sprig_time::{Fade, IntervalCache, IntervalKeyPolicy, Scheduler};

pub struct Runtime {
    pub nodes: NodeArena,
    pub time: Timing,
    pub camera: Camera2D,
    pub viewport: Viewport,
    pub(crate) intervals: IntervalCache,
    pub(crate) scheduler: Scheduler<Runtime>,
    pub(crate) fades: AHashMap<NodeID, Fade>,
}

pub struct Timing {
    pub delta: f32,
    pub elapsed: f32,
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_key_policy(IntervalKeyPolicy::Exact)
    }

    pub fn with_key_policy(policy: IntervalKeyPolicy) -> Self {
        Self {
            nodes: NodeArena::new(),
            time: Timing {
                delta: 0.0,
                elapsed: 0.0,
            },
            camera: Camera2D::default(),
            viewport: Viewport::matching(1920.0, 1080.0),
            intervals: IntervalCache::with_policy(policy),
            scheduler: Scheduler::new(),
            fades: AHashMap::default(),
        }
    }

    pub fn from_config(config: &ProjectConfig) -> Self {
        let mut runtime = Self::with_key_policy(config.interval_keys);
        runtime.viewport =
            Viewport::matching(config.virtual_width as f32, config.virtual_height as f32);
        runtime
    }

    pub fn intervals(&self) -> &IntervalCache {
        &self.intervals
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn active_fades(&self) -> usize {
        self.fades.len()
    }

    /// One frame: due delayed actions, then fades, then deferred node destruction.
    pub fn update(&mut self, delta_time: f32) {
        self.time.delta = delta_time;
        self.time.elapsed += delta_time;

        // Drain first so actions can schedule or cancel through `self` while running.
        let due = self.scheduler.drain_due(delta_time);
        Scheduler::run_due(due, self);

        self.advance_fades(delta_time);
        self.nodes.flush_freed();
    }

    fn advance_fades(&mut self, delta_time: f32) {
        let nodes = &mut self.nodes;
        self.fades.retain(|&id, fade| {
            let Some(group) = nodes.get_mut(id).and_then(SceneNode::canvas_group_mut) else {
                debug!("dropping fade for missing canvas group {id}");
                return false;
            };
            let step = fade.advance(delta_time);
            group.alpha = step.alpha;
            !step.finished
        });
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
