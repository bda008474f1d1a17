//! Leaderboard rendering.
//!
//! Produces the fixed-width table posted by the report command, the reset command
//! and the scheduled report. The table is wrapped in a code block so Discord
//! renders it in a monospace font and the columns line up.
//!
//! Discord rejects messages longer than `MESSAGE_LIMIT` characters, so large
//! tables are split into pages on row boundaries. Every page is a complete code
//! block with its own header.

use crate::model::score::{display_points, PlayerScore};

/// Maximum message length accepted by Discord, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

const HEADER: &str = "Nick Gracza  |  Punkty";
const SEPARATOR: &str = "----------------------";
/// Width the player name column is padded to.
const NAME_WIDTH: usize = 14;
const CODE_FENCE: &str = "```";
const ELLIPSIS: char = '…';

/// Renders scores into leaderboard pages of at most `limit` characters.
///
/// One row per entry in the given order. An empty slice renders a single page
/// with only the header and separator rows. A name too long to fit a page on its
/// own is clipped; its points are always kept.
///
/// # Arguments
/// - `scores` - Entries to render, usually `ScoreStore::all()`
/// - `limit` - Maximum characters per page, usually `MESSAGE_LIMIT`
///
/// # Returns
/// - `Vec<String>` - At least one page, each including the surrounding code fence
pub fn paginate(scores: &[PlayerScore], limit: usize) -> Vec<String> {
    let frame = page(String::new()).chars().count();
    let row_budget = limit.saturating_sub(frame);

    let mut pages = Vec::new();
    let mut body = String::new();
    let mut body_len = 0;

    for score in scores {
        let row = render_row(score, row_budget);
        let row_len = row.chars().count();

        if body_len > 0 && frame + body_len + row_len > limit {
            pages.push(page(std::mem::take(&mut body)));
            body_len = 0;
        }

        body.push_str(&row);
        body_len += row_len;
    }

    pages.push(page(body));
    pages
}

/// Adds an introduction before the first page and a closing line after the last.
///
/// Each is joined to its neighbouring page with a newline when the result stays
/// within `limit`, and sent as a message of its own otherwise.
pub fn frame_pages(
    mut pages: Vec<String>,
    intro: Option<&str>,
    outro: Option<&str>,
    limit: usize,
) -> Vec<String> {
    if let Some(intro) = intro {
        match pages.first_mut() {
            Some(first) if joined_len(intro, first) <= limit => {
                first.insert(0, '\n');
                first.insert_str(0, intro);
            }
            _ => pages.insert(0, intro.to_string()),
        }
    }

    if let Some(outro) = outro {
        match pages.last_mut() {
            Some(last) if joined_len(last, outro) <= limit => {
                last.push('\n');
                last.push_str(outro);
            }
            _ => pages.push(outro.to_string()),
        }
    }

    pages
}

fn joined_len(first: &str, second: &str) -> usize {
    first.chars().count() + 1 + second.chars().count()
}

fn page(body: String) -> String {
    format!(
        "{}\n{}\n{}\n{}{}",
        CODE_FENCE, HEADER, SEPARATOR, body, CODE_FENCE
    )
}

/// Renders one table row, clipping the name when the row exceeds `budget`.
fn render_row(score: &PlayerScore, budget: usize) -> String {
    let points = display_points(score.points);
    let row = format!("{:<width$} | {}\n", score.name, points, width = NAME_WIDTH);
    if row.chars().count() <= budget {
        return row;
    }

    // " | ", "\n" and the ellipsis
    let keep = budget.saturating_sub(points.chars().count() + 5);
    let name: String = score.name.chars().take(keep).collect();
    format!("{}{} | {}\n", name, ELLIPSIS, points)
}
