use serde::Serialize;

/// Telemedicine roster entry with its bookable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub available: &'static [&'static str],
    pub location: &'static str,
}

pub static DOCTORS: &[Doctor] = &[
    Doctor {
        id: 1,
        name: "Dr. Ramesh Kumar",
        specialty: "General Physician",
        available: &["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM"],
        location: "Anantapur PHC",
    },
    Doctor {
        id: 2,
        name: "Dr. Priya Sharma",
        specialty: "Pediatrician",
        available: &["9:30 AM", "10:30 AM", "2:30 PM", "4:00 PM"],
        location: "Kurnool District Hospital",
    },
    Doctor {
        id: 3,
        name: "Dr. Suresh Reddy",
        specialty: "Internal Medicine",
        available: &["10:00 AM", "11:30 AM", "3:00 PM", "4:30 PM"],
        location: "Nellore General Hospital",
    },
    Doctor {
        id: 4,
        name: "Dr. Lakshmi Devi",
        specialty: "Gynecologist",
        available: &["9:00 AM", "11:00 AM", "2:00 PM"],
        location: "Kadapa Womens Hospital",
    },
    Doctor {
        id: 5,
        name: "Dr. Venkat Rao",
        specialty: "Cardiologist",
        available: &["10:00 AM", "3:00 PM"],
        location: "Vizag Telemedicine Center",
    },
];
