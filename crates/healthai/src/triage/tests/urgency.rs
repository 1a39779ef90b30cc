use super::common::*;
use crate::triage::UrgencyTier;

#[test]
fn thresholds_classify_total_severity() {
    for total in 0..3 {
        assert_eq!(UrgencyTier::from_total_severity(total), UrgencyTier::Low);
    }
    for total in 3..6 {
        assert_eq!(UrgencyTier::from_total_severity(total), UrgencyTier::Moderate);
    }
    for total in 6..10 {
        assert_eq!(UrgencyTier::from_total_severity(total), UrgencyTier::High);
    }
    for total in [10, 11, 25, 200] {
        assert_eq!(UrgencyTier::from_total_severity(total), UrgencyTier::Emergency);
    }
}

#[test]
fn extreme_ages_escalate_low_and_moderate_by_one_tier() {
    for age in [0, 4, 66, 90] {
        let low = assess(&["sore throat"], age);
        assert_eq!(low.urgency, UrgencyTier::Moderate, "age {age}");
        assert!(low
            .action
            .starts_with(&format!("⚠️ Given patient age ({age}), extra caution recommended.")));

        let moderate = assess(&["vomiting"], age);
        assert_eq!(moderate.urgency, UrgencyTier::High, "age {age}");
    }
}

#[test]
fn escalation_keeps_base_action_and_colour() {
    let result = assess(&["sore throat"], 70);

    assert_eq!(
        result.action,
        "⚠️ Given patient age (70), extra caution recommended. 💊 Rest at home, monitor symptoms. Visit clinic if worsening"
    );
    assert_eq!(result.urgency_color, UrgencyTier::Low.color());
}

#[test]
fn adult_ages_leave_urgency_unchanged() {
    for age in [5, 30, 65] {
        assert_eq!(assess(&["sore throat"], age).urgency, UrgencyTier::Low);
        assert_eq!(assess(&["vomiting"], age).urgency, UrgencyTier::Moderate);
    }
}

#[test]
fn high_and_emergency_are_not_escalated() {
    let high = assess(&["high fever"], 80);
    assert_eq!(high.urgency, UrgencyTier::High);
    assert_eq!(high.action, UrgencyTier::High.action());

    let emergency = assess(&["unconscious"], 2);
    assert_eq!(emergency.urgency, UrgencyTier::Emergency);
    assert_eq!(emergency.action, UrgencyTier::Emergency.action());
}

#[test]
fn negative_ages_are_treated_literally() {
    assert_eq!(assess(&["sore throat"], -3).urgency, UrgencyTier::Moderate);
}
