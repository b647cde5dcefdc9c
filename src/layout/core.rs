use crate::geometry::Size;
use crate::style::BoxStyle;

/// Anything the flow pass can position: it reports its extent and accepts
/// the placement computed for it.
pub trait FlowItem {
    fn extent(&self) -> Size;
    fn place(&mut self, placement: Placement);
}

/// Position and logical grid slot assigned by a pack pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    pub x: u16,
    pub y: u16,
    pub row: usize,
    pub col: usize,
}

/// How far the vertical cursor moves when a row wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowAdvance {
    /// Height of the box placed immediately before the wrap.
    #[default]
    PreviousBox,
    /// Height of the tallest box in the completed row.
    TallestInRow,
}

/// Spacing parameters for the flow pass, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConfig {
    pub left_margin: u16,
    pub top_margin: u16,
    pub horizontal_gap: u16,
    pub vertical_gap: u16,
    pub row_advance: RowAdvance,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::from_style(&BoxStyle::default())
    }
}

impl FlowConfig {
    /// Spacing that matches how blocks sit once composed: every block
    /// carries its own left and top margin, so those margins are both the
    /// leading offset and the gap between neighbours.
    pub fn from_style(style: &BoxStyle) -> Self {
        Self {
            left_margin: style.margin_left,
            top_margin: style.margin_top,
            horizontal_gap: style.margin_left,
            vertical_gap: style.margin_top,
            row_advance: RowAdvance::PreviousBox,
        }
    }

    pub fn with_row_advance(mut self, row_advance: RowAdvance) -> Self {
        self.row_advance = row_advance;
        self
    }
}

/// Outcome of one pack pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackSummary {
    pub boxes: usize,
    pub rows: usize,
}

/// Left-to-right, top-to-bottom flow packer.
#[derive(Debug, Clone, Default)]
pub struct FlowLayout {
    config: FlowConfig,
}

impl FlowLayout {
    pub fn new(config: FlowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Reposition every item from scratch, in slice order.
    pub fn repack<T: FlowItem>(&self, items: &mut [T], viewport_width: u16) -> PackSummary {
        let extents: Vec<Size> = items.iter().map(FlowItem::extent).collect();
        let placements = self.plan(&extents, viewport_width);
        for (item, placement) in items.iter_mut().zip(&placements) {
            item.place(*placement);
        }
        PackSummary {
            boxes: placements.len(),
            rows: placements.last().map(|p| p.row + 1).unwrap_or(0),
        }
    }

    /// Compute placements for a sequence of extents without touching any item.
    ///
    /// A box only wraps when it is not the first on its row, so a box wider
    /// than the viewport still lands at the left margin and overflows.
    pub fn plan(&self, extents: &[Size], viewport_width: u16) -> Vec<Placement> {
        let cfg = &self.config;
        let mut placements = Vec::with_capacity(extents.len());

        let mut x = cfg.left_margin;
        let mut y = cfg.top_margin;
        let mut row = 0;
        let mut col = 0;
        let mut previous_height = 0u16;
        let mut row_height = 0u16;

        for extent in extents {
            if col > 0 && x.saturating_add(extent.width) > viewport_width {
                let advance = match cfg.row_advance {
                    RowAdvance::PreviousBox => previous_height,
                    RowAdvance::TallestInRow => row_height,
                };
                x = cfg.left_margin;
                y = y.saturating_add(advance).saturating_add(cfg.vertical_gap);
                row += 1;
                col = 0;
                row_height = 0;
            }

            placements.push(Placement { x, y, row, col });

            x = x
                .saturating_add(extent.width)
                .saturating_add(cfg.horizontal_gap);
            col += 1;
            previous_height = extent.height;
            row_height = row_height.max(extent.height);
        }

        placements
    }
}
