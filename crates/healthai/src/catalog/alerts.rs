use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Red,
    Orange,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutbreakAlert {
    pub region: &'static str,
    pub disease: &'static str,
    pub level: AlertLevel,
    pub cases_7days: u32,
    pub message: &'static str,
}

pub static OUTBREAK_ALERTS: &[OutbreakAlert] = &[
    OutbreakAlert {
        region: "Kadapa",
        disease: "Malaria",
        level: AlertLevel::Red,
        cases_7days: 47,
        message: "Active outbreak - avoid stagnant water areas",
    },
    OutbreakAlert {
        region: "Anantapur",
        disease: "Dengue",
        level: AlertLevel::Orange,
        cases_7days: 28,
        message: "Rising cases - use mosquito repellent",
    },
    OutbreakAlert {
        region: "Nellore",
        disease: "Cholera",
        level: AlertLevel::Orange,
        cases_7days: 19,
        message: "Water contamination suspected - boil water before drinking",
    },
    OutbreakAlert {
        region: "Vizag",
        disease: "COVID-19",
        level: AlertLevel::Yellow,
        cases_7days: 12,
        message: "Mild uptick - masks recommended in crowded spaces",
    },
];

pub fn alert_for_region(region: &str) -> Option<&'static OutbreakAlert> {
    OUTBREAK_ALERTS.iter().find(|alert| alert.region == region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_match_exact_region_names() {
        assert_eq!(alert_for_region("Nellore").map(|alert| alert.level), Some(AlertLevel::Orange));
        assert!(alert_for_region("nellore").is_none());
    }

    #[test]
    fn levels_serialize_uppercase() {
        let value = serde_json::to_value(OUTBREAK_ALERTS[3]).expect("serializes");
        assert_eq!(value["level"], "YELLOW");
        assert_eq!(value["cases_7days"], 12);
    }
}
