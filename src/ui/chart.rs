use std::collections::BTreeMap;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, PlotResponse, PlotUi, Points, Polygon, VLine};

use crate::color::{sentiment_color, sentiment_fill};
use crate::data::filter::RangeFilter;
use crate::data::model::ScoredPost;
use crate::state::ChartKind;

/// Width of a histogram bin, in percent.
pub const BIN_WIDTH: u8 = 5;

const RANGE_LINE: Color32 = Color32::from_rgb(230, 230, 230);
const RANGE_FILL: Color32 = Color32::from_rgba_premultiplied(40, 40, 40, 40);

// ---------------------------------------------------------------------------
// Chart adapter contract
// ---------------------------------------------------------------------------

/// A chart over the range-filtered posts that can report a clicked score.
pub trait ChartAdapter {
    fn kind(&self) -> ChartKind;

    /// Plot `posts` with `filter` highlighted. Returns the clicked score in
    /// percent, if the user clicked inside the plot this frame.
    fn show(&self, ui: &mut Ui, posts: &[&ScoredPost], filter: RangeFilter) -> Option<u8>;
}

/// Adapter rendering the given chart kind.
pub fn adapter_for(kind: ChartKind) -> &'static dyn ChartAdapter {
    match kind {
        ChartKind::Distribution => &DistributionChart,
        ChartKind::Swarm => &SwarmChart,
    }
}

// ---------------------------------------------------------------------------
// Distribution: histogram of scores
// ---------------------------------------------------------------------------

pub struct DistributionChart;

impl ChartAdapter for DistributionChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Distribution
    }

    fn show(&self, ui: &mut Ui, posts: &[&ScoredPost], filter: RangeFilter) -> Option<u8> {
        let counts = histogram(posts, BIN_WIDTH);
        let width = f64::from(BIN_WIDTH);
        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let center = (i as f64 + 0.5) * width;
                Bar::new(center, count as f64)
                    .width(width * 0.9)
                    .fill(sentiment_color(center / 100.0))
                    .name(format!("{:.0}–{:.0}", center - width / 2.0, center + width / 2.0))
            })
            .collect();
        let y_max = counts.iter().copied().max().unwrap_or(0).max(1) as f64;

        let response = base_plot(self.kind(), "Posts").show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Posts"));
            range_overlay(plot_ui, filter, (0.0, y_max));
            plot_ui.pointer_coordinate()
        });
        clicked_percent(&response)
    }
}

/// Post counts per `bin_width`-percent bin over 0–100. A score of exactly
/// 1.0 lands in the last bin.
pub fn histogram(posts: &[&ScoredPost], bin_width: u8) -> Vec<usize> {
    let bin_width = bin_width.max(1);
    let bins = 100_usize.div_ceil(usize::from(bin_width));
    let mut counts = vec![0; bins];
    for post in posts {
        let bin = (post.score() * 100.0 / f64::from(bin_width)).floor() as usize;
        counts[bin.min(bins - 1)] += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Swarm ("Quantity"): one dot per post
// ---------------------------------------------------------------------------

pub struct SwarmChart;

impl ChartAdapter for SwarmChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Swarm
    }

    fn show(&self, ui: &mut Ui, posts: &[&ScoredPost], filter: RangeFilter) -> Option<u8> {
        let layout = swarm_layout(posts);
        let y_max = layout
            .values()
            .flatten()
            .map(|p| p[1].abs())
            .fold(1.0_f64, f64::max);

        let response = base_plot(self.kind(), "Stack").show(ui, |plot_ui| {
            for (&percent, points) in &layout {
                plot_ui.points(
                    Points::new(points.clone())
                        .radius(5.0)
                        .color(sentiment_color(f64::from(percent) / 100.0))
                        .name(format!("{percent}%")),
                );
            }
            range_overlay(plot_ui, filter, (-y_max - 1.0, y_max + 1.0));
            plot_ui.pointer_coordinate()
        });
        clicked_percent(&response)
    }
}

/// Beeswarm placement: each post sits at `x = score * 100`; posts sharing a
/// rounded percent are stacked around the axis at 0, +1, -1, +2, -2, ...
/// in dataset order.
pub fn swarm_layout(posts: &[&ScoredPost]) -> BTreeMap<u8, Vec<[f64; 2]>> {
    let mut columns: BTreeMap<u8, Vec<[f64; 2]>> = BTreeMap::new();
    for post in posts {
        let column = columns.entry(post.percent()).or_default();
        let n = column.len();
        let offset = if n % 2 == 1 {
            n.div_ceil(2) as f64
        } else {
            -((n / 2) as f64)
        };
        column.push([post.score() * 100.0, offset]);
    }
    columns
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

fn base_plot<'a>(kind: ChartKind, y_label: &'a str) -> Plot<'a> {
    Plot::new(("sentiment_chart", kind))
        .x_axis_label("Sentiment (%)")
        .y_axis_label(y_label)
        .include_x(0.0)
        .include_x(100.0)
        .include_y(0.0)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .allow_scroll(false)
        .allow_zoom(false)
}

/// Vertical markers at the selected bounds; the band between them is shaded
/// once both are set. `y_span` must lie within the chart's own data range,
/// since the band takes part in auto-bounds.
fn range_overlay(plot_ui: &mut PlotUi, filter: RangeFilter, y_span: (f64, f64)) {
    let stroke = Stroke::new(1.5, RANGE_LINE);
    if let Some(start) = filter.start {
        plot_ui.vline(VLine::new(f64::from(start)).stroke(stroke).name("start"));
    }
    if let Some(end) = filter.end {
        plot_ui.vline(VLine::new(f64::from(end)).stroke(stroke).name("end"));
    }
    if let Some((start, end)) = filter.bounds() {
        let band = band_corners(start, end, y_span);
        let fill = if start <= end {
            RANGE_FILL
        } else {
            // Inverted range, nothing can match it.
            sentiment_fill(0.0, 40)
        };
        plot_ui.polygon(Polygon::new(band).fill_color(fill).stroke(Stroke::NONE));
    }
}

/// Corners of the shaded range band, counter-clockwise from bottom-left.
pub fn band_corners(start: u8, end: u8, (y_min, y_max): (f64, f64)) -> Vec<[f64; 2]> {
    let (lo, hi) = (f64::from(start), f64::from(end));
    vec![[lo, y_min], [hi, y_min], [hi, y_max], [lo, y_max]]
}

fn clicked_percent(response: &PlotResponse<Option<PlotPoint>>) -> Option<u8> {
    if !response.response.clicked() {
        return None;
    }
    response.inner.and_then(|p| pointer_to_percent(p.x))
}

/// Plot x coordinate → whole percent in 0–100.
pub fn pointer_to_percent(x: f64) -> Option<u8> {
    x.is_finite().then(|| x.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::sample_dataset;
    use crate::data::model::Author;

    fn posts(scores: &[f64]) -> Vec<ScoredPost> {
        scores
            .iter()
            .map(|&s| ScoredPost::new(Author::new("Curious Mind", "@curious_mind"), "?", s).unwrap())
            .collect()
    }

    #[test]
    fn adapters_match_their_kind() {
        for kind in ChartKind::ALL {
            assert_eq!(adapter_for(kind).kind(), kind);
        }
    }

    #[test]
    fn histogram_bins_and_top_edge() {
        let owned = posts(&[0.0, 0.04, 0.05, 0.5, 1.0, 0.99]);
        let refs: Vec<&ScoredPost> = owned.iter().collect();
        let counts = histogram(&refs, BIN_WIDTH);
        assert_eq!(counts.len(), 20);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[10], 1);
        assert_eq!(counts[19], 2);
        assert_eq!(counts.iter().sum::<usize>(), 6);
    }

    #[test]
    fn histogram_covers_whole_sample_set() {
        let ds = sample_dataset();
        let refs: Vec<&ScoredPost> = ds.posts().iter().collect();
        assert_eq!(histogram(&refs, BIN_WIDTH).iter().sum::<usize>(), 30);
        assert!(histogram(&[], BIN_WIDTH).iter().all(|&c| c == 0));
    }

    #[test]
    fn swarm_stacks_alternate_around_axis() {
        let owned = posts(&[0.9, 0.9, 0.9, 0.9, 0.9, 0.25]);
        let refs: Vec<&ScoredPost> = owned.iter().collect();
        let layout = swarm_layout(&refs);
        let offsets: Vec<f64> = layout[&90].iter().map(|p| p[1]).collect();
        assert_eq!(offsets, vec![0.0, 1.0, -1.0, 2.0, -2.0]);
        assert_eq!(layout[&25], vec![[25.0, 0.0]]);
    }

    #[test]
    fn swarm_keeps_exact_score_on_x() {
        let owned = posts(&[0.956, 0.96]);
        let refs: Vec<&ScoredPost> = owned.iter().collect();
        let layout = swarm_layout(&refs);
        let column = &layout[&96];
        assert_eq!(column.len(), 2);
        assert!((column[0][0] - 95.6).abs() < 1e-9);
        assert!((column[1][0] - 96.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_band_stays_on_count_axis() {
        let ds = sample_dataset();
        let refs: Vec<&ScoredPost> = ds.posts().iter().collect();
        let y_max = *histogram(&refs, BIN_WIDTH).iter().max().unwrap() as f64;

        let band = band_corners(30, 70, (0.0, y_max));
        assert!(band.iter().all(|p| p[1] >= 0.0 && p[1] <= y_max));
        assert_eq!(band[0], [30.0, 0.0]);
        assert_eq!(band[2], [70.0, y_max]);
    }

    #[test]
    fn pointer_rounds_and_clamps() {
        assert_eq!(pointer_to_percent(29.6), Some(30));
        assert_eq!(pointer_to_percent(-4.0), Some(0));
        assert_eq!(pointer_to_percent(140.2), Some(100));
        assert_eq!(pointer_to_percent(f64::NAN), None);
    }
}
