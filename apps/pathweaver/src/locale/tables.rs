use super::{LocaleTable, Quotes};

pub(super) static ALL: &[&LocaleTable] = &[&ENGLISH, &HINDI];

pub(super) static ENGLISH: LocaleTable = LocaleTable {
    language: "English",
    labels: &[
        ("title", "Future Path"),
        ("subtitle", "Personalized AI career mapping for the modern Indian workforce."),
        ("fullName", "Full Name"),
        ("language", "Preferred Language"),
        ("level", "Current Education Level"),
        ("major", "Field of Study / Major"),
        ("goals", "Career Goals"),
        ("goalsPlaceholder", "What do you want to achieve in 5 years?"),
        ("skills", "Skills & Expertise"),
        ("interests", "Primary Interests"),
        ("generate", "Generate Visionary Roadmap"),
        ("prophecy", "Your Career Destiny"),
        ("matchPotential", "Match Potential"),
        ("compensation", "Expected Compensation"),
        ("mastery", "Essential Mastery"),
        ("actionSteps", "Actionable Steps"),
        ("intelligence", "Live Intelligence"),
        ("marketTracking", "Real-time market tracking for the Indian landscape."),
        ("deepDive", "Deep Dive"),
        ("sources", "Verified Data Sources"),
        ("placeholderSkill", "Add skill (e.g. Python)"),
        ("placeholderInterest", "Add interest (e.g. Space)"),
        ("placeholderName", "e.g. Arjun Mehta"),
        ("placeholderMajor", "e.g. Commerce, B.Tech, Arts"),
        ("placeholderTrends", "e.g. AI role in Indian IT 2025"),
        ("consulting", "Consulting the Future..."),
        ("loadingSub", "Gemini AI is crafting your personalized Indian career roadmap."),
        ("navigator", "Navigator"),
        ("market", "Market"),
        ("profile", "Profile"),
        ("share", "Share Path"),
        ("chatPlaceholder", "Ask me anything about your career..."),
        ("filters", "Filter & Sort"),
        ("sortBy", "Sort By"),
        ("location", "Location"),
        ("salary", "Salary"),
        ("score", "Alignment"),
        ("marketOutlook", "Market Outlook"),
        ("skillsDiscovery", "Skill Discovery"),
        ("skillsSubtitle", "High-value skills recommended for your profile and trending in India."),
        ("difficulty", "Difficulty"),
        ("resources", "Learning Paths"),
        ("trending", "Trending"),
        ("retryNotice", "Something went wrong. Please try again."),
        ("requiredFields", "Please enter your name and field of study."),
    ],
    quotes: Quotes {
        profile: "The only way to do great work is to love what you do. Start by defining your core.",
        recommendations: "Your destiny is not a matter of chance; it is a matter of choice. Choose your path wisely.",
        skills: "Skill is the bridge between where you are and where you want to be. Start building.",
        trends: "The best way to predict the future is to create it. Stay ahead of the curve.",
    },
};

pub(super) static HINDI: LocaleTable = LocaleTable {
    language: "Hindi (हिंदी)",
    labels: &[
        ("title", "भविष्य का पथ"),
        ("subtitle", "आधुनिक भारतीय कार्यबल के लिए व्यक्तिगत एआई करियर मैपिंग।"),
        ("fullName", "पूरा नाम"),
        ("language", "पसंदीदा भाषा"),
        ("level", "वर्तमान शिक्षा स्तर"),
        ("major", "अध्ययन का क्षेत्र / प्रमुख"),
        ("goals", "करियर के लक्ष्य"),
        ("goalsPlaceholder", "आप 5 वर्षों में क्या हासिल करना चाहते हैं?"),
        ("skills", "कौशल और विशेषज्ञता"),
        ("interests", "प्राथमिक रुचियां"),
        ("generate", "भविष्य का रोडमैप तैयार करें"),
        ("prophecy", "आपका भविष्यफल"),
        ("matchPotential", "मिलान क्षमता"),
        ("compensation", "अपेक्षित मुआवजा"),
        ("mastery", "आवश्यक महारत"),
        ("actionSteps", "कार्रवाई योग्य कदम"),
        ("intelligence", "लाइव इंटेलिजेंस"),
        ("marketTracking", "भारतीय परिदृश्य के लिए रीयल-टाइम मार्केट ट्रैकिंग।"),
        ("deepDive", "गहराई से जानें"),
        ("sources", "सत्यापित डेटा स्रोत"),
        ("placeholderSkill", "कौशल जोड़ें..."),
        ("placeholderInterest", "रुचि जोड़ें..."),
        ("placeholderName", "जैसे: अर्जुन मेहता"),
        ("placeholderMajor", "जैसे: वाणिज्य, बी.टेक, कला"),
        ("placeholderTrends", "जैसे: 2025 में भारतीय आईटी में एआई की भूमिका"),
        ("consulting", "भविष्य से परामर्श..."),
        ("loadingSub", "जेमिनी एआई आपका व्यक्तिगत भारतीय करियर रोडमैप तैयार कर रहा है।"),
        ("navigator", "नेविगेटर"),
        ("market", "बाज़ार"),
        ("profile", "प्रोफ़ाइल"),
        ("share", "साझा करें"),
        ("chatPlaceholder", "मुझसे कुछ भी पूछें..."),
        ("filters", "फिल्टर और सॉर्ट"),
        ("sortBy", "सॉर्ट करें"),
        ("location", "स्थान"),
        ("salary", "वेतन"),
        ("score", "मिलान"),
        ("marketOutlook", "बाज़ार का दृष्टिकोण"),
        ("skillsDiscovery", "कौशल खोज"),
        ("skillsSubtitle", "आपके प्रोफाइल के लिए अनुशंसित और भारत में प्रचलित उच्च-मूल्य वाले कौशल।"),
        ("difficulty", "कठिनाई"),
        ("resources", "सीखने के मार्ग"),
        ("trending", "प्रचलित"),
        ("retryNotice", "कुछ गलत हो गया। कृपया पुनः प्रयास करें।"),
        ("requiredFields", "कृपया अपना नाम और अध्ययन का क्षेत्र दर्ज करें।"),
    ],
    quotes: Quotes {
        profile: "महान कार्य करने का एकमात्र तरीका यह है कि आप जो करते हैं उससे प्रेम करें।",
        recommendations: "आपका भाग्य संयोग का विषय नहीं है; यह चुनाव का विषय है।",
        skills: "कौशल वह पुल है जहाँ आप हैं और जहाँ आप होना चाहते हैं।",
        trends: "भविष्य की भविष्यवाणी करने का सबसे अच्छा तरीका इसे बनाना है।",
    },
};
