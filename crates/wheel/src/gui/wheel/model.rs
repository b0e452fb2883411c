use std::path::PathBuf;
use wheel_core::store;
use wheel_core::{Category, Chart, Point, SegmentAddress, Viewport};

pub struct State {
    pub chart: Chart,
    pub store_path: Option<PathBuf>,
}

impl State {
    pub fn new(chart: Chart, store_path: Option<PathBuf>) -> Self {
        Self { chart, store_path }
    }

    /// Maps a widget-space click onto the wheel and applies it.
    pub fn click(&mut self, point: Point, viewport: Viewport) -> ClickAction {
        let Some(chart_point) = viewport.to_chart(point) else {
            return ClickAction::default();
        };

        let Some(hit) = self.chart.hit(chart_point) else {
            return ClickAction::default();
        };
        self.replace(self.chart.select(hit));
        ClickAction::new(true, Some(hit))
    }

    pub fn reset(&mut self) -> ClickAction {
        if self.chart.selections().is_empty() {
            return ClickAction::default();
        }
        self.replace(self.chart.reset_all());
        ClickAction::new(true, None)
    }

    pub fn reload_categories(&mut self, categories: Vec<Category>) {
        self.replace(self.chart.with_categories(categories));
    }

    fn replace(&mut self, chart: Chart) {
        self.chart = chart;
        self.persist();
    }

    fn persist(&self) {
        if let Some(path) = &self.store_path
            && let Err(e) = store::save(path, &self.chart)
        {
            log::error!("Failed to save chart to {}: {}", path.display(), e);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClickAction {
    pub should_redraw: bool,
    pub hit: Option<SegmentAddress>,
}

impl ClickAction {
    pub fn new(should_redraw: bool, hit: Option<SegmentAddress>) -> Self {
        Self { should_redraw, hit }
    }
}
