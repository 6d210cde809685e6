use std::cmp::Ordering;

use crate::types::db::leaderboard;
use crate::types::dto::employee::LeaderboardEntryDto;

/// Turn raw leaderboard rows into ranked standings.
///
/// Totals are coerced from their stored text form (unparseable values count
/// as zero), sorted descending with a stable sort so tied totals keep their
/// input order, and given 1-based ranks where ties share a rank and the next
/// distinct total takes its positional rank.
pub fn rank_standings(rows: Vec<leaderboard::Model>) -> Vec<LeaderboardEntryDto> {
    let mut scored: Vec<(f64, leaderboard::Model)> = rows
        .into_iter()
        .map(|row| (parse_total(&row.seasonal_waste), row))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut standings = Vec::with_capacity(scored.len());
    let mut previous: Option<(f64, u32)> = None;

    for (position, (total, row)) in scored.into_iter().enumerate() {
        let rank = match previous {
            Some((prev_total, prev_rank)) if prev_total == total => prev_rank,
            _ => position as u32 + 1,
        };
        previous = Some((total, rank));

        standings.push(LeaderboardEntryDto {
            business_id: row.business_id,
            company_name: row
                .company_name
                .unwrap_or_else(|| "Unknown".to_string()),
            seasonal_waste: total,
            rank,
            rank_change: 0,
        });
    }

    standings
}

fn parse_total(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(business_id: &str, company_name: Option<&str>, seasonal_waste: &str) -> leaderboard::Model {
        leaderboard::Model {
            business_id: business_id.to_string(),
            company_name: company_name.map(|n| n.to_string()),
            seasonal_waste: seasonal_waste.to_string(),
            last_season_reset: "2025-06-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_ties_share_rank_and_next_value_takes_positional_rank() {
        let rows = vec![
            row("b1", Some("Acme"), "50"),
            row("b2", Some("Globex"), "200"),
            row("b3", Some("Initech"), "200"),
            row("b4", Some("Umbrella"), "10"),
        ];

        let standings = rank_standings(rows);

        let ranked: Vec<(&str, u32)> = standings
            .iter()
            .map(|e| (e.business_id.as_str(), e.rank))
            .collect();
        assert_eq!(ranked, vec![("b2", 1), ("b3", 1), ("b1", 3), ("b4", 4)]);
    }

    #[test]
    fn test_tied_totals_keep_input_order() {
        let rows = vec![
            row("first", None, "100"),
            row("second", None, "100"),
            row("third", None, "100"),
        ];

        let standings = rank_standings(rows);

        let order: Vec<&str> = standings.iter().map(|e| e.business_id.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
        assert!(standings.iter().all(|e| e.rank == 1));
    }

    #[test]
    fn test_rank_change_is_always_zero() {
        let rows = vec![row("b1", None, "10"), row("b2", None, "20")];

        let standings = rank_standings(rows);

        assert!(standings.iter().all(|e| e.rank_change == 0));
    }

    #[test]
    fn test_empty_input_produces_empty_output() {
        assert!(rank_standings(Vec::new()).is_empty());
    }

    #[test]
    fn test_missing_company_name_defaults_to_unknown() {
        let standings = rank_standings(vec![row("b1", None, "5")]);

        assert_eq!(standings[0].company_name, "Unknown");
    }

    #[test]
    fn test_unparseable_total_counts_as_zero() {
        let rows = vec![row("b1", Some("Acme"), "not-a-number"), row("b2", Some("Globex"), "3.5")];

        let standings = rank_standings(rows);

        assert_eq!(standings[0].business_id, "b2");
        assert_eq!(standings[0].seasonal_waste, 3.5);
        assert_eq!(standings[1].business_id, "b1");
        assert_eq!(standings[1].seasonal_waste, 0.0);
    }

    #[test]
    fn test_totals_stored_with_whitespace_still_parse() {
        let standings = rank_standings(vec![row("b1", Some("Acme"), "  42.5 ")]);

        assert_eq!(standings[0].seasonal_waste, 42.5);
    }
}
