//! Plain-text rendering for the terminal front end
//!
//! Every function returns a `String` so output can be asserted on directly.

use std::fmt::Write;

use crate::models::{PetitionSignature, PetitionStats, Story};
use crate::page::{ContentBlock, ImpactSite, StatCard};
use crate::viz::ChartSeries;

/// Width of the longest bar in a text chart
pub const BAR_WIDTH: usize = 40;

const RULE_WIDTH: usize = 60;

/// Title underlined with dashes
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(RULE_WIDTH))
}

pub fn stat_grid(cards: &[StatCard]) -> String {
    let width = cards.iter().map(|c| c.value.len()).max().unwrap_or(0);
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "  {:>width$}  {}", card.value, card.label, width = width);
    }
    out
}

/// Horizontal bar chart.
///
/// Circular kinds show each slice's share of the total instead of a scaled
/// value, and a fixed `y_max` pins the scale.
pub fn chart(series: &ChartSeries) -> String {
    let mut out = format!("{} ({})\n", series.title, series.kind);
    if series.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    if series.kind.is_circular() {
        let total: f64 = series.values.iter().sum();
        for (label, value) in series.labels.iter().zip(&series.values) {
            let share = if total > 0.0 { value / total } else { 0.0 };
            let _ = writeln!(
                out,
                "  {:<lw$}  {:<bw$}  {:>5.1}%",
                label,
                bar(share, BAR_WIDTH),
                share * 100.0,
                lw = label_width,
                bw = BAR_WIDTH
            );
        }
        return out;
    }

    let scale = series.y_max.unwrap_or_else(|| series.max_value());
    for (label, value) in series.labels.iter().zip(&series.values) {
        let fraction = if scale > 0.0 { value / scale } else { 0.0 };
        let _ = writeln!(
            out,
            "  {:<lw$}  {:<bw$}  {}",
            label,
            bar(fraction, BAR_WIDTH),
            value,
            lw = label_width,
            bw = BAR_WIDTH
        );
    }
    out
}

fn bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    "#".repeat(filled)
}

/// Progress toward the signature goal
pub fn goal_progress(stats: &PetitionStats) -> String {
    format!(
        "[{:<width$}] {:.1}% of {}",
        bar(stats.progress(), BAR_WIDTH),
        stats.progress() * 100.0,
        crate::page::format_count(PetitionStats::GOAL),
        width = BAR_WIDTH
    )
}

/// Story card with a truncated excerpt
pub fn story(story: &Story, excerpt_chars: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", story.title);
    let _ = writeln!(
        out,
        "  {} | {} | {}",
        story.place(),
        story.category.label(),
        story.display_date()
    );
    let _ = writeln!(out, "  {}", story.excerpt(excerpt_chars));
    let _ = writeln!(out, "  - {}", story.author);
    out
}

pub fn supporter(signature: &PetitionSignature) -> String {
    let mut line = format!(
        "{:<24} {:<28} {}",
        signature.display_name(),
        signature.place(),
        signature.display_date()
    );
    if let Some(comment) = signature.comment.as_deref().filter(|c| !c.trim().is_empty()) {
        let _ = write!(line, "\n    \"{}\"", comment);
    }
    line
}

pub fn content_block(block: &ContentBlock) -> String {
    let mut out = format!("{}\n", block.heading);
    if !block.body.is_empty() {
        let _ = writeln!(out, "  {}", block.body);
    }
    for point in block.points {
        let _ = writeln!(out, "  * {}", point);
    }
    out
}

pub fn impact_site(site: &ImpactSite) -> String {
    format!(
        "{:<12} {:<20} {:<7} ({:.2}, {:.2})",
        site.county,
        site.impact,
        site.severity.as_str(),
        site.lat,
        site.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClimateDataSeries, StoryCategory, VisualizationKind};
    use crate::viz::adapt;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let series = ClimateDataSeries::new("CO2", "emissions", VisualizationKind::Bar)
            .point("Kenya", 0.4)
            .point("USA", 14.7);
        let text = chart(&adapt(&series));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "CO2 (bar)");
        assert!(lines[1].starts_with("  Kenya"));
        assert!(lines[1].contains("#") && lines[1].ends_with("0.4"));
        assert!(lines[2].contains(&"#".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_pie_chart_shows_shares() {
        let series = ClimateDataSeries::new("Sectors", "emissions", VisualizationKind::Pie)
            .point("Energy", 3.0)
            .point("Farming", 1.0);
        let text = chart(&adapt(&series));
        assert!(text.contains("75.0%"));
        assert!(text.contains("25.0%"));
    }

    #[test]
    fn test_empty_chart() {
        let series = ClimateDataSeries::new("Nothing", "misc", VisualizationKind::Line);
        assert!(chart(&adapt(&series)).contains("(no data)"));
    }

    #[test]
    fn test_y_max_pins_scale() {
        let series = ClimateDataSeries::new("Risk", "vulnerability", VisualizationKind::Line)
            .point("Drought", 5.0);
        let text = chart(&adapt(&series).with_y_max(10.0));
        let filled = text.lines().nth(1).unwrap().matches('#').count();
        assert_eq!(filled, BAR_WIDTH / 2);
    }

    #[test]
    fn test_story_card_excerpt() {
        let card = Story {
            id: "s1".to_string(),
            title: "Dry wells".to_string(),
            content: "x".repeat(300),
            author: "Ekai".to_string(),
            location: "Kakuma".to_string(),
            county: "Turkana".to_string(),
            category: StoryCategory::Drought,
            verified: true,
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
        };
        let text = story(&card, 200);
        assert!(text.contains("Kakuma, Turkana"));
        assert!(text.contains("Mar 05, 2024"));
        assert!(text.contains(&format!("{}...", "x".repeat(200))));
    }

    #[test]
    fn test_anonymous_supporter() {
        let signature = PetitionSignature {
            id: "p1".to_string(),
            name: Some("Hidden".to_string()),
            location: "Kisumu".to_string(),
            county: "Kisumu".to_string(),
            comment: Some("For our children".to_string()),
            is_anonymous: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let text = supporter(&signature);
        assert!(text.starts_with("Anonymous"));
        assert!(!text.contains("Hidden"));
        assert!(text.contains("\"For our children\""));
    }

    #[test]
    fn test_stat_grid_aligns_values() {
        let text = stat_grid(&[StatCard::new("12", "Signatures"), StatCard::new("100,000", "Goal")]);
        assert_eq!(text, "       12  Signatures\n  100,000  Goal\n");
    }
}
