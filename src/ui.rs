// UI layer: renders the ranked list to stdout and owns the progress
// spinner shown while the request is in flight. Rendering is generic over
// `io::Write` so tests can capture the output; only diagnostics and the
// spinner go to stderr, keeping stdout clean data.

use crate::api::RecommendedItem;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Spinner drawn on stderr while the blocking request runs. The caller
/// clears it before printing results.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print the header and one formatted line per item.
pub fn print_recommendations<W: Write>(
    out: &mut W,
    hall_id: i64,
    items: &[RecommendedItem],
) -> io::Result<()> {
    writeln!(out, "Top recommendations for hall_id={}:", hall_id)?;
    for item in items {
        writeln!(out, "{}", item_line(item))?;
    }
    Ok(())
}

fn item_line(item: &RecommendedItem) -> String {
    format!(
        "- {} | score={} | kcal={} | vegan={} | veg={}",
        item.name,
        item.score,
        item.kcal(),
        item.is_vegan(),
        item.is_vegetarian()
    )
}
