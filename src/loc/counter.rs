use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use super::language::{CommentStyle, comment_style};
use crate::util::split_lines;

/// Per-file (or aggregated) line classification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineCounts {
    pub fn total(&self) -> usize {
        self.code + self.comment + self.blank
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

/// Count lines of a file on disk. Unreadable and binary files count as zero.
#[cfg(test)]
pub fn count_file(path: &std::path::Path, language: &str) -> LineCounts {
    match crate::util::read_source(path) {
        Some(content) => count_lines(&content, language),
        None => LineCounts::default(),
    }
}

/// Classify every line of `content` using the comment style of `language`.
/// Languages without a registered style only distinguish code from blank.
pub fn count_lines(content: &str, language: &str) -> LineCounts {
    if content.is_empty() {
        return LineCounts::default();
    }
    let lines = split_lines(content);
    match comment_style(language) {
        Some(style) => count_with_style(&lines, style),
        None => count_simple(&lines),
    }
}

fn count_simple(lines: &[&str]) -> LineCounts {
    let mut counts = LineCounts::default();
    for line in lines {
        if line.trim().is_empty() {
            counts.blank += 1;
        } else {
            counts.code += 1;
        }
    }
    counts
}

fn count_with_style(lines: &[&str], style: &CommentStyle) -> LineCounts {
    let mut counts = LineCounts::default();
    let mut in_block = false;

    for line in lines {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if in_block {
                counts.comment += 1;
            } else {
                counts.blank += 1;
            }
            continue;
        }

        if in_block && let Some((_, close)) = style.block_comment {
            counts.comment += 1;
            if trimmed.contains(close) {
                in_block = false;
            }
            continue;
        }

        if let Some((open, close)) = style.block_comment
            && trimmed.starts_with(open)
        {
            counts.comment += 1;
            // A line holding both tokens is a complete comment, even when they overlap.
            if !trimmed.contains(close) {
                in_block = true;
            }
            continue;
        }

        if style.line_comments.iter().any(|lc| trimmed.starts_with(lc)) {
            counts.comment += 1;
            continue;
        }

        counts.code += 1;
    }

    counts
}

#[cfg(test)]
#[path = "counter_test.rs"]
mod tests;
