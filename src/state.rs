use std::fmt;

use crate::data::filter::filtered_indices;
use crate::data::model::{PostDataset, ScoredPost};
use crate::data::sampler::{distributed_sample, DEFAULT_SAMPLE_COUNT};
use crate::data::selection::RangeSelection;

// ---------------------------------------------------------------------------
// Chart variant
// ---------------------------------------------------------------------------

/// Which chart the central panel shows. Both read the same selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    #[default]
    Distribution,
    Swarm,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Distribution, ChartKind::Swarm];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Distribution => "Distribution",
            ChartKind::Swarm => "Quantity",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Query context
// ---------------------------------------------------------------------------

/// The search the dataset answers. Display only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    pub name: String,
    pub handle: String,
    pub query: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
pub struct DashboardState {
    /// Posts returned for the query.
    pub dataset: PostDataset,

    /// Search shown in the header card.
    pub query: QueryContext,

    /// Score range being picked on the charts.
    pub selection: RangeSelection,

    /// Active chart variant.
    pub chart: ChartKind,

    /// How many cards the sampled list holds.
    pub sample_count: usize,

    /// Indices of posts passing the current range (cached).
    pub visible_indices: Vec<usize>,

    /// Indices of the representative posts shown as cards (cached).
    pub sampled_indices: Vec<usize>,

    /// Whether the "View all" window is open.
    pub show_all_posts: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            dataset: PostDataset::default(),
            query: QueryContext::default(),
            selection: RangeSelection::default(),
            chart: ChartKind::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            visible_indices: Vec::new(),
            sampled_indices: Vec::new(),
            show_all_posts: false,
            status_message: None,
        }
    }
}

impl DashboardState {
    pub fn new(dataset: PostDataset, query: QueryContext, sample_count: usize) -> Self {
        let mut state = Self {
            query,
            sample_count,
            ..Self::default()
        };
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset. Any selection in progress is dropped.
    pub fn set_dataset(&mut self, dataset: PostDataset) {
        self.dataset = dataset;
        self.selection.reset();
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and `sampled_indices` after a change.
    pub fn refilter(&mut self) {
        let filter = self.selection.filter();
        self.visible_indices = filtered_indices(&self.dataset, &filter);

        let posts = self.dataset.posts();
        self.sampled_indices =
            distributed_sample(&self.visible_indices, self.sample_count, |&i| posts[i].score());
    }

    /// A chart reported a clicked score value (percent).
    pub fn select_score(&mut self, value: u8) {
        self.selection.select(value);
        log::debug!("Selection now {}, filter {}", self.selection, self.selection.filter());
        self.refilter();
    }

    /// Back to the unfiltered view.
    pub fn reset_selection(&mut self) {
        self.selection.reset();
        log::debug!("Selection reset");
        self.refilter();
    }

    /// Switch the chart variant. The selection is left untouched.
    pub fn set_chart(&mut self, chart: ChartKind) {
        if self.chart != chart {
            log::debug!("Chart switched to {chart}");
            self.chart = chart;
        }
    }

    pub fn open_all_posts(&mut self) {
        self.show_all_posts = true;
    }

    /// Posts passing the current range, for the charts.
    pub fn filtered_posts(&self) -> Vec<&ScoredPost> {
        self.resolve(&self.visible_indices)
    }

    /// Representative posts for the card grid.
    pub fn sampled_posts(&self) -> Vec<&ScoredPost> {
        self.resolve(&self.sampled_indices)
    }

    /// Caption next to the Reset button.
    pub fn selection_label(&self) -> Option<String> {
        self.selection.label()
    }

    /// Title above the card grid.
    pub fn posts_heading(&self) -> &'static str {
        if self.selection.is_complete() {
            "Sampled Posts"
        } else {
            "Posts"
        }
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&ScoredPost> {
        indices.iter().filter_map(|&i| self.dataset.get(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::sample_dataset;
    use crate::data::model::Author;

    fn sample_state() -> DashboardState {
        DashboardState::new(sample_dataset(), QueryContext::default(), DEFAULT_SAMPLE_COUNT)
    }

    #[test]
    fn starts_unfiltered_with_ten_cards() {
        let state = sample_state();
        assert_eq!(state.filtered_posts().len(), 30);
        let sampled = state.sampled_posts();
        assert_eq!(sampled.len(), 10);
        assert_eq!(sampled[0].author().name, "Tech Critic");
        assert_eq!(sampled[9].score(), 1.0);
        assert_eq!(state.posts_heading(), "Posts");
        assert_eq!(state.selection_label(), None);
    }

    #[test]
    fn pending_start_does_not_filter() {
        let mut state = sample_state();
        state.select_score(80);
        assert_eq!(state.selection, RangeSelection::StartPending { start: 80 });
        assert_eq!(state.filtered_posts().len(), 30);
        assert_eq!(state.selection_label().as_deref(), Some("Sampling starting 80"));
    }

    #[test]
    fn completed_range_filters_and_samples() {
        let mut state = sample_state();
        state.select_score(80);
        state.select_score(100);

        let filtered = state.filtered_posts();
        assert_eq!(filtered.len(), 14);
        assert!(filtered.iter().all(|p| p.score() >= 0.8));

        let sampled = state.sampled_posts();
        assert_eq!(sampled.len(), 10);
        assert!(sampled.windows(2).all(|w| w[0].score() <= w[1].score()));
        assert_eq!(state.posts_heading(), "Sampled Posts");
    }

    #[test]
    fn inverted_range_empties_both_views() {
        let mut state = sample_state();
        state.select_score(60);
        state.select_score(40);
        assert!(state.filtered_posts().is_empty());
        assert!(state.sampled_posts().is_empty());
    }

    #[test]
    fn switching_chart_keeps_selection() {
        let mut state = sample_state();
        state.select_score(30);
        state.select_score(70);
        let before = state.visible_indices.clone();

        state.set_chart(ChartKind::Swarm);
        assert_eq!(state.chart, ChartKind::Swarm);
        assert_eq!(state.selection, RangeSelection::Complete { start: 30, end: 70 });
        assert_eq!(state.visible_indices, before);
    }

    #[test]
    fn reset_restores_full_view() {
        let mut state = sample_state();
        state.select_score(90);
        state.select_score(100);
        state.reset_selection();
        assert_eq!(state.selection, RangeSelection::Unset);
        assert_eq!(state.filtered_posts().len(), 30);
    }

    #[test]
    fn loading_a_dataset_clears_the_selection() {
        let mut state = sample_state();
        state.select_score(10);
        state.select_score(20);
        state.status_message = Some("Error: stale".into());

        let post = ScoredPost::new(Author::new("Solo", "@solo"), "Only one.", 0.42).unwrap();
        state.set_dataset(PostDataset::from_posts(vec![post]));

        assert_eq!(state.selection, RangeSelection::Unset);
        assert_eq!(state.status_message, None);
        assert_eq!(state.sampled_posts().len(), 1);
    }

    #[test]
    fn empty_dataset_renders_nothing() {
        let state = DashboardState::new(PostDataset::default(), QueryContext::default(), 10);
        assert!(state.filtered_posts().is_empty());
        assert!(state.sampled_posts().is_empty());
    }

    #[test]
    fn chart_labels() {
        assert_eq!(ChartKind::Distribution.label(), "Distribution");
        assert_eq!(ChartKind::Swarm.to_string(), "Quantity");
    }
}
