use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hospital {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub distance: &'static str,
    pub phone: &'static str,
    pub emergency: bool,
}

const fn hospital(
    name: &'static str,
    kind: &'static str,
    distance: &'static str,
    phone: &'static str,
    emergency: bool,
) -> Hospital {
    Hospital {
        name,
        kind,
        distance,
        phone,
        emergency,
    }
}

static ANANTAPUR: &[Hospital] = &[
    hospital("Government General Hospital Anantapur", "Government", "2.1 km", "08554-272233", true),
    hospital("Srinivasa Nursing Home", "Private", "3.4 km", "08554-275566", true),
    hospital("PHC Anantapur North", "PHC", "1.2 km", "08554-277788", false),
];

static KURNOOL: &[Hospital] = &[
    hospital("Government General Hospital Kurnool", "Government", "1.8 km", "08518-222444", true),
    hospital("Raghavendra Hospital", "Private", "4.2 km", "08518-226688", true),
];

static FALLBACK: &[Hospital] = &[
    hospital("Nearest Government Hospital", "Government", "Varies", "104 (Health Helpline)", true),
    hospital("Call Health Helpline", "Helpline", "—", "104", true),
    hospital("Emergency Services", "Emergency", "—", "108", true),
];

/// Nearby facilities for a district name (case-insensitive), else the state helplines.
pub fn hospitals_for(region: &str) -> &'static [Hospital] {
    match region.to_lowercase().as_str() {
        "anantapur" => ANANTAPUR,
        "kurnool" => KURNOOL,
        _ => FALLBACK,
    }
}
