use serde::Serialize;

use super::{localized, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationArticle {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub summary: &'static str,
    pub content: &'static str,
    pub hindi: &'static str,
    pub telugu: &'static str,
}

/// Article as served, with the body picked for the reader's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationView {
    #[serde(flatten)]
    pub article: &'static EducationArticle,
    pub display_content: &'static str,
}

static ARTICLES: &[EducationArticle] = &[
    EducationArticle {
        id: 1,
        title: "Preventing Malaria",
        category: "Prevention",
        icon: "🦟",
        color: "#dc2626",
        summary: "Simple steps to prevent mosquito-borne malaria.",
        content: "Use mosquito nets while sleeping. Eliminate stagnant water near your home. Apply repellent. Wear full-sleeve clothes at dusk. Early symptoms: fever with chills — see doctor immediately.",
        hindi: "मलेरिया से बचाव: मच्छरदानी उपयोग करें, रुके पानी को हटाएं।",
        telugu: "మలేరియా నివారణ: దోమతెర ఉపయోగించండి, నిల్వ నీటిని తొలగించండి.",
    },
    EducationArticle {
        id: 2,
        title: "Clean Water & Sanitation",
        category: "Prevention",
        icon: "💧",
        color: "#0ea5e9",
        summary: "Safe water practices to prevent waterborne diseases.",
        content: "Always boil drinking water. Use ORS for diarrhea. Wash hands before eating. Store water in covered containers. Use toilets — open defecation spreads disease.",
        hindi: "पीने का पानी उबालें, हाथ धोएं, शौचालय का उपयोग करें।",
        telugu: "తాగునీటిని మరిగించండి, చేతులు కడుక్కోండి.",
    },
    EducationArticle {
        id: 3,
        title: "Child Nutrition & Vaccination",
        category: "Children",
        icon: "👶",
        color: "#16a34a",
        summary: "Keep children healthy with nutrition and vaccines.",
        content: "Breastfeed exclusively 6 months. Ensure all vaccines on time (BCG, Polio, DPT, Measles). Give iron supplements. Visit ASHA worker monthly.",
        hindi: "6 माह स्तनपान कराएं, समय पर टीके लगवाएं।",
        telugu: "6 నెలలు తల్లి పాలు పట్టించండి, టీకాలు వేయించండి.",
    },
    EducationArticle {
        id: 4,
        title: "Maternal Health",
        category: "Women",
        icon: "🤱",
        color: "#7c3aed",
        summary: "Essential care during pregnancy and after delivery.",
        content: "Register pregnancy at PHC. Take 4 antenatal checkups. Take iron+folic acid daily. Deliver at hospital. Watch for: bleeding, severe headache, reduced fetal movement.",
        hindi: "गर्भावस्था में 4 जांच जरूरी, आयरन की गोलियां लें, अस्पताल में प्रसव।",
        telugu: "గర్భం నమోదు చేయించుకోండి, 4 తనిఖీలు తప్పనిసరి.",
    },
    EducationArticle {
        id: 5,
        title: "Managing Diabetes",
        category: "Chronic Disease",
        icon: "🩸",
        color: "#ea580c",
        summary: "Control blood sugar naturally and with medication.",
        content: "Test blood sugar regularly. Avoid white rice, sugar, maida. Walk 30 mins daily. Never skip medicines. Low sugar warning: sweating, trembling — eat sugar immediately.",
        hindi: "नियमित रक्त शर्करा जांच, सही खान-पान, दवाइयां नियमित लें।",
        telugu: "క్రమంగా రక్తంలో చక్కెర పరీక్షించండి, మందులు వదలకండి.",
    },
    EducationArticle {
        id: 6,
        title: "Mental Health Awareness",
        category: "Mental Health",
        icon: "🧠",
        color: "#0f766e",
        summary: "Recognize depression and anxiety in rural communities.",
        content: "Signs of depression: sadness, loss of interest, sleep problems. Talk to trusted person. Call iCall: 9152987821. Avoid alcohol for stress — it worsens mental health.",
        hindi: "अवसाद: उदासी, रुचि कम होना। iCall: 9152987821",
        telugu: "నిరాశ లక్షణాలు: దుఃఖం, ఆసక్తి తగ్గడం. iCall: 9152987821",
    },
];

/// Articles in catalog order, optionally restricted to one exact category.
/// An empty category is treated as no filter.
pub fn education_articles(category: Option<&str>, language: Language) -> Vec<EducationView> {
    let category = category.filter(|category| !category.is_empty());
    ARTICLES
        .iter()
        .filter(|article| category.map_or(true, |wanted| article.category == wanted))
        .map(|article| EducationView {
            article,
            display_content: localized(language, article.content, article.hindi, article.telugu),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_is_exact() {
        let prevention = education_articles(Some("Prevention"), Language::English);
        assert_eq!(
            prevention.iter().map(|view| view.article.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(education_articles(Some("prevention"), Language::English).is_empty());
        assert_eq!(education_articles(Some(""), Language::English).len(), 6);
        assert_eq!(education_articles(None, Language::English).len(), 6);
    }

    #[test]
    fn display_content_follows_language() {
        let views = education_articles(Some("Mental Health"), Language::Hindi);
        assert_eq!(views[0].display_content, "अवसाद: उदासी, रुचि कम होना। iCall: 9152987821");

        let english = education_articles(Some("Women"), Language::English);
        assert_eq!(english[0].display_content, english[0].article.content);
    }

    #[test]
    fn views_serialize_flat() {
        let views = education_articles(Some("Children"), Language::Telugu);
        let value = serde_json::to_value(&views[0]).expect("serializes");
        assert_eq!(value["id"], 3);
        assert_eq!(value["title"], "Child Nutrition & Vaccination");
        assert_eq!(value["display_content"], value["telugu"]);
    }
}
