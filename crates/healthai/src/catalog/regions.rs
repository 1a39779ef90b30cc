use serde::ser::Serializer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionStat {
    pub name: &'static str,
    pub risk: &'static str,
    pub cases: u32,
    pub disease: &'static str,
}

/// Dashboard dataset: per-region caseloads, monthly totals, and disease share (%).
#[derive(Debug, Serialize)]
pub struct HealthData {
    pub regions: &'static [RegionStat],
    pub monthly_cases: [u32; 12],
    #[serde(serialize_with = "ordered_map")]
    pub disease_distribution: &'static [(&'static str, u32)],
}

impl HealthData {
    /// Exact-name lookup falling back to the first listed region.
    pub fn region_or_default(&self, name: &str) -> &'static RegionStat {
        let regions: &'static [RegionStat] = self.regions;
        regions
            .iter()
            .find(|region| region.name == name)
            .unwrap_or(&regions[0])
    }
}

fn ordered_map<S: Serializer>(
    entries: &&'static [(&'static str, u32)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(name, share)| (*name, *share)))
}

pub static HEALTH_DATA: HealthData = HealthData {
    regions: &[
        RegionStat { name: "Anantapur", risk: "High", cases: 142, disease: "Malaria" },
        RegionStat { name: "Kurnool", risk: "Medium", cases: 87, disease: "Dengue" },
        RegionStat { name: "Guntur", risk: "Low", cases: 34, disease: "Typhoid" },
        RegionStat { name: "Vizag", risk: "Medium", cases: 95, disease: "COVID-19" },
        RegionStat { name: "Nellore", risk: "High", cases: 118, disease: "Dengue" },
        RegionStat { name: "Chittoor", risk: "Low", cases: 28, disease: "Common Cold" },
        RegionStat { name: "Kadapa", risk: "High", cases: 156, disease: "Malaria" },
        RegionStat { name: "Prakasam", risk: "Medium", cases: 73, disease: "Typhoid" },
    ],
    monthly_cases: [120, 145, 98, 167, 203, 189, 234, 178, 145, 167, 189, 210],
    disease_distribution: &[
        ("Malaria", 28),
        ("Dengue", 24),
        ("Typhoid", 18),
        ("COVID-19", 15),
        ("Others", 15),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_serializes_as_ordered_object() {
        let value = serde_json::to_string(&HEALTH_DATA).expect("serializes");
        assert!(value.contains(r#""disease_distribution":{"Malaria":28,"Dengue":24"#));
    }

    #[test]
    fn distribution_shares_sum_to_one_hundred() {
        let total: u32 = HEALTH_DATA
            .disease_distribution
            .iter()
            .map(|(_, share)| share)
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn unknown_region_falls_back_to_first() {
        assert_eq!(HEALTH_DATA.region_or_default("Kadapa").cases, 156);
        assert_eq!(HEALTH_DATA.region_or_default("Atlantis").name, "Anantapur");
    }
}
