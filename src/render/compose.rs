//! Text composition of rendered blocks into a single frame.

use crate::boxes::CounterBox;
use crate::width::{block_width, display_width};

/// Vertical placement of shorter blocks in a horizontal join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Bottom,
}

/// Horizontal placement of narrower lines in a vertical join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Right,
}

/// Place blocks side by side. Every block is padded to its own width and to
/// the tallest block's height before the lines are concatenated.
pub fn join_horizontal(blocks: &[&[String]], align: VAlign) -> Vec<String> {
    let height = blocks.iter().map(|block| block.len()).max().unwrap_or(0);
    let mut out = vec![String::new(); height];

    for block in blocks {
        let width = block_width(block);
        let missing = height - block.len();
        for (idx, line) in out.iter_mut().enumerate() {
            let source = match align {
                VAlign::Top => block.get(idx),
                VAlign::Bottom => idx.checked_sub(missing).and_then(|i| block.get(i)),
            };
            match source {
                Some(text) => {
                    line.push_str(text);
                    pad_to(line, text, width);
                }
                None => line.push_str(&" ".repeat(width)),
            }
        }
    }

    out
}

/// Stack blocks top to bottom, padding every line to the widest one.
pub fn join_vertical(blocks: &[Vec<String>], align: HAlign) -> Vec<String> {
    let width = blocks
        .iter()
        .map(|block| block_width(block))
        .max()
        .unwrap_or(0);

    blocks
        .iter()
        .flatten()
        .map(|line| {
            let fill = " ".repeat(width.saturating_sub(display_width(line)));
            match align {
                HAlign::Left => format!("{line}{fill}"),
                HAlign::Right => format!("{fill}{line}"),
            }
        })
        .collect()
}

/// Group boxes by their packed row and compose the frame: rows joined
/// bottom-aligned, rows stacked left-aligned in ascending row order.
pub fn compose_rows(boxes: &[CounterBox]) -> Vec<String> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut start = 0;
    while start < boxes.len() {
        let row = boxes[start].row();
        let end = boxes[start..]
            .iter()
            .position(|counter| counter.row() != row)
            .map(|offset| start + offset)
            .unwrap_or(boxes.len());
        let blocks: Vec<&[String]> = boxes[start..end]
            .iter()
            .map(|counter| counter.rendered().lines.as_slice())
            .collect();
        rows.push(join_horizontal(&blocks, VAlign::Bottom));
        start = end;
    }
    join_vertical(&rows, HAlign::Left)
}

fn pad_to(line: &mut String, segment: &str, width: usize) {
    let used = display_width(segment);
    if used < width {
        line.push_str(&" ".repeat(width - used));
    }
}
