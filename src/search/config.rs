/// Options for a single call to [`find_path_with_config`](crate::find_path_with_config)
///
/// Default options:
/// ```
/// # use grid_astar::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         max_expanded: None,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after this many Cells were expanded (defaults to `None`, meaning no limit).
    ///
    /// A search that hits the limit ends with
    /// [`SearchStatus::Truncated`](crate::SearchStatus::Truncated) and no Path. The Cells it
    /// expanded until then are still reported. The start Cell is always expanded, so a limit of
    /// `0` behaves like a limit of `1`.
    pub max_expanded: Option<usize>,
    /// The number of Nodes to reserve memory for up front (defaults to `64`).
    ///
    /// Has no effect on the result.
    pub size_hint: usize,
}

impl SearchConfig {
    /// a SearchConfig that explores until the goal is found or the reachable area is exhausted
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        max_expanded: None,
        size_hint: 64,
    };

    /// a SearchConfig that gives up after expanding `max_expanded` Cells
    ///
    /// ## Examples
    /// ```
    /// # use grid_astar::SearchConfig;
    /// let config = SearchConfig::with_limit(1000);
    /// assert_eq!(config.max_expanded, Some(1000));
    /// ```
    pub const fn with_limit(max_expanded: usize) -> SearchConfig {
        SearchConfig {
            max_expanded: Some(max_expanded),
            size_hint: 64,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNBOUNDED
    }
}
