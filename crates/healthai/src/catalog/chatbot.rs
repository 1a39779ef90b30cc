use super::{localized, Language};

struct KnowledgeEntry {
    keyword: &'static str,
    answer: &'static str,
    hindi: &'static str,
    telugu: &'static str,
}

impl KnowledgeEntry {
    fn answer_in(&self, language: Language) -> &'static str {
        localized(language, self.answer, self.hindi, self.telugu)
    }
}

// Checked in order; the first keyword contained in the message wins.
static KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        keyword: "malaria",
        answer: "Malaria is caused by Plasmodium parasites via mosquito bites. Symptoms: high fever, chills, sweating, headache. Prevention: mosquito nets, repellent, eliminate stagnant water. Treatment requires prescription — visit doctor immediately.",
        hindi: "मलेरिया मच्छर के काटने से होता है। लक्षण: तेज बुखार, ठंड। तुरंत डॉक्टर से मिलें।",
        telugu: "మలేరియా దోమ కాటు వల్ల వస్తుంది. వెంటనే డాక్టర్‌ని సంప్రదించండి.",
    },
    KnowledgeEntry {
        keyword: "dengue",
        answer: "Dengue is spread by Aedes mosquitoes. Symptoms: sudden high fever, rash, severe joint pain. Warning: bleeding or vomiting blood = go to ER. Monitor platelet count.",
        hindi: "डेंगू में तेज बुखार, दाने होते हैं। प्लेटलेट काउंट जांचें।",
        telugu: "డెంగ్యూ: అకస్మాత్ జ్వరం, దద్దురు. ప్లేట్లెట్ కౌంట్ తనిఖీ చేయండి.",
    },
    KnowledgeEntry {
        keyword: "diabetes",
        answer: "Diabetes = high blood sugar. Symptoms: frequent urination, thirst, blurred vision. Management: diet, exercise, medication, regular sugar monitoring.",
        hindi: "मधुमेह में रक्त शर्करा अधिक होती है। व्यायाम और सही खान-पान जरूरी।",
        telugu: "మధుమేహం: రక్తంలో చక్కెర అధికం. ఆహార నియంత్రణ, వ్యాయామం అవసరం.",
    },
    KnowledgeEntry {
        keyword: "hypertension",
        answer: "High BP (above 140/90) is a silent killer. Reduce salt, exercise daily, take medications. Check BP regularly.",
        hindi: "140/90 से अधिक BP खतरनाक है। नमक कम करें, व्यायाम करें।",
        telugu: "140/90 కంటే ఎక్కువ BP ప్రమాదకరం. ఉప్పు తగ్గించండి.",
    },
    KnowledgeEntry {
        keyword: "tuberculosis",
        answer: "TB = bacterial lung infection. Symptoms: cough 2+ weeks, blood in sputum, night sweats. Free DOTS treatment at government hospitals.",
        hindi: "टीबी: 2+ सप्ताह खांसी, रात को पसीना। सरकारी अस्पताल में मुफ्त इलाज।",
        telugu: "క్షయ: 2+ వారాలు దగ్గు. ప్రభుత్వ ఆసుపత్రిలో ఉచిత DOTS చికిత్స.",
    },
    KnowledgeEntry {
        keyword: "anemia",
        answer: "Anemia = low iron/hemoglobin. Symptoms: fatigue, pale skin, dizziness. Eat iron-rich foods: spinach, lentils, jaggery. Take iron+folic acid tablets.",
        hindi: "एनीमिया में आयरन कम होता है। पालक, दाल खाएं, आयरन की गोलियां लें।",
        telugu: "రక్తహీనత: పాలకూర, పప్పులు తినండి. ఇనుము మాత్రలు వాడండి.",
    },
    KnowledgeEntry {
        keyword: "covid",
        answer: "COVID-19: fever, cough, loss of smell/taste, breathlessness. Isolate if infected. Vaccinate. Emergency if oxygen below 94%.",
        hindi: "COVID-19: बुखार, खांसी, स्वाद/गंध खोना। टीका लगवाएं।",
        telugu: "COVID-19: జ్వరం, దగ్గు, వాసన కోల్పోవడం. టీకా వేయించుకోండి.",
    },
    KnowledgeEntry {
        keyword: "cholera",
        answer: "Cholera = waterborne disease. Symptoms: sudden watery diarrhea, vomiting, dehydration. Give ORS immediately. Boil drinking water.",
        hindi: "हैजा जल जनित रोग है। ORS पिएं, पानी उबालें।",
        telugu: "కలరా: నీళ్ళ విరేచనాలు. ORS తీసుకోండి, నీళ్ళు మరిగించండి.",
    },
    KnowledgeEntry {
        keyword: "fever",
        answer: "Fever above 38C: take paracetamol, cool compress, drink fluids. See doctor if fever persists 3+ days or exceeds 103F.",
        hindi: "38C से अधिक बुखार: पैरासिटामोल लें, ठंडी पट्टी लगाएं।",
        telugu: "38C కంటే జ్వరం: పారాసిటమాల్ తీసుకోండి.",
    },
];

static FALLBACK: KnowledgeEntry = KnowledgeEntry {
    keyword: "default",
    answer: "I can help with malaria, dengue, diabetes, TB, fever, anemia, COVID, cholera, hypertension. Please type your symptom or disease name.",
    hindi: "मैं आपका AI स्वास्थ्य सहायक हूं। बीमारी का नाम या लक्षण टाइप करें।",
    telugu: "నేను మీ AI ఆరోగ్య సహాయకుడిని. వ్యాధి పేరు లేదా లక్షణం టైప్ చేయండి.",
};

/// Keyword lookup over the health knowledge base.
pub fn chatbot_response(message: &str, language: Language) -> &'static str {
    let message = message.to_lowercase();
    KNOWLEDGE_BASE
        .iter()
        .find(|entry| message.contains(entry.keyword))
        .unwrap_or(&FALLBACK)
        .answer_in(language)
}
