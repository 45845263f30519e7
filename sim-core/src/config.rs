/// Ray counts the emission fan may be set to.
pub const RAY_COUNT_OPTIONS: [usize; 4] = [90, 180, 360, 720];

/// User-facing simulation tunables, owned by the [`crate::scene::Scene`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// How many obstacles a scatter aims to place (best effort).
    pub obstacle_count: usize,
    /// Primary rays per emission; one of [`RAY_COUNT_OPTIONS`].
    pub ray_count: usize,
    pub reflections_enabled: bool,
    pub light_auto_move: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            obstacle_count: 10,
            ray_count: 90,
            reflections_enabled: true,
            light_auto_move: false,
        }
    }
}
