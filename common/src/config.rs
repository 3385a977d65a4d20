#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Only print warnings, errors and the final summary line.
    pub quiet: bool,
    /// Also print every balance mutation as it happens.
    ///
    /// Ignored when `quiet` is set.
    pub verbose: bool,
}
