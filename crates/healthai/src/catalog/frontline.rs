use rand::Rng;
use serde::Serialize;

use super::alerts::{alert_for_region, OutbreakAlert};
use super::regions::HEALTH_DATA;

/// Daily worklist snapshot for a frontline health worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontlineSummary {
    pub region: String,
    pub active_cases: u32,
    pub dominant_disease: &'static str,
    pub risk_level: &'static str,
    pub alert: Option<&'static OutbreakAlert>,
    pub today_visits: u32,
    pub pending_reports: u32,
    pub referrals_today: u32,
    pub patients_due_followup: u32,
}

/// Builds the summary for `region`. Regional stats fall back to the first
/// dashboard region, but the requested name is echoed back unchanged.
pub fn frontline_summary<R: Rng + ?Sized>(region: &str, rng: &mut R) -> FrontlineSummary {
    let stats = HEALTH_DATA.region_or_default(region);
    FrontlineSummary {
        region: region.to_owned(),
        active_cases: stats.cases,
        dominant_disease: stats.disease,
        risk_level: stats.risk,
        alert: alert_for_region(region),
        today_visits: rng.gen_range(8..=24),
        pending_reports: rng.gen_range(2..=8),
        referrals_today: rng.gen_range(1..=5),
        patients_due_followup: rng.gen_range(3..=12),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn known_region_carries_stats_and_alert() {
        let mut rng = StdRng::seed_from_u64(7);
        let summary = frontline_summary("Kadapa", &mut rng);

        assert_eq!(summary.active_cases, 156);
        assert_eq!(summary.dominant_disease, "Malaria");
        assert_eq!(summary.risk_level, "High");
        assert_eq!(summary.alert.map(|alert| alert.cases_7days), Some(47));
    }

    #[test]
    fn unknown_region_echoes_name_with_default_stats() {
        let mut rng = StdRng::seed_from_u64(7);
        let summary = frontline_summary("Atlantis", &mut rng);

        assert_eq!(summary.region, "Atlantis");
        assert_eq!(summary.active_cases, 142);
        assert!(summary.alert.is_none());
    }

    #[test]
    fn counters_stay_within_ranges() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let summary = frontline_summary("Guntur", &mut rng);
            assert!((8..=24).contains(&summary.today_visits));
            assert!((2..=8).contains(&summary.pending_reports));
            assert!((1..=5).contains(&summary.referrals_today));
            assert!((3..=12).contains(&summary.patients_due_followup));
        }
    }

    #[test]
    fn missing_alert_serializes_as_null() {
        let mut rng = StdRng::seed_from_u64(1);
        let value = serde_json::to_value(frontline_summary("Guntur", &mut rng)).expect("serializes");
        assert!(value["alert"].is_null());
    }
}
