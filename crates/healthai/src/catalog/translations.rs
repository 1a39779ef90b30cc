use serde::Serialize;

/// Localized labels for triage results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub emergency: &'static str,
    pub high: &'static str,
    pub moderate: &'static str,
    pub low: &'static str,
    pub call_108: &'static str,
    pub visit_today: &'static str,
    pub visit_soon: &'static str,
    pub rest: &'static str,
}

static TELUGU: Translation = Translation {
    emergency: "అత్యవసర పరిస్థితి",
    high: "అధిక ప్రమాదం",
    moderate: "మోస్తరు ప్రమాదం",
    low: "తక్కువ ప్రమాదం",
    call_108: "108కి వెంటనే కాల్ చేయండి",
    visit_today: "ఈరోజే ఆసుపత్రికి వెళ్ళండి",
    visit_soon: "24-48 గంటల్లో క్లినిక్‌కు వెళ్ళండి",
    rest: "విశ్రాంతి తీసుకోండి, నీళ్ళు ఎక్కువగా తాగండి",
};

static HINDI: Translation = Translation {
    emergency: "आपातकालीन स्थिति",
    high: "उच्च जोखिम",
    moderate: "मध्यम जोखिम",
    low: "कम जोखिम",
    call_108: "तुरंत 108 पर कॉल करें",
    visit_today: "आज ही अस्पताल जाएं",
    visit_soon: "24-48 घंटे में क्लिनिक जाएं",
    rest: "आराम करें और खूब पानी पिएं",
};

/// Label table for a language code; Telugu unless `hi` is requested.
pub fn translations_for(lang: &str) -> &'static Translation {
    match lang {
        "hi" => &HINDI,
        _ => &TELUGU,
    }
}
