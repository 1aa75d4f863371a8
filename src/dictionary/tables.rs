/*!
 * Curated dictionary data.
 *
 * Every row is keyed by a lowercase English phrase or word and lists its
 * rendering per canonical language name. Rows do not need to cover every
 * language; a missing cell is a dictionary miss.
 */

/// Translations of one English key, as (canonical language, text)
pub type Translations = &'static [(&'static str, &'static str)];

/// Whole-message phrases: greetings and common chat lines
pub const PHRASES: &[(&str, Translations)] = &[
    ("hello", &[
        ("hindi", "नमस्ते"),
        ("telugu", "నమస్కారం"),
        ("tamil", "வணக்கம்"),
        ("kannada", "ನಮಸ್ಕಾರ"),
        ("malayalam", "നമസ്കാരം"),
        ("bengali", "নমস্কার"),
        ("marathi", "नमस्कार"),
        ("gujarati", "નમસ્તે"),
        ("punjabi", "ਸਤ ਸ੍ਰੀ ਅਕਾਲ"),
        ("spanish", "hola"),
        ("french", "bonjour"),
        ("german", "hallo"),
        ("italian", "ciao"),
        ("portuguese", "olá"),
    ]),
    ("thank you", &[
        ("hindi", "धन्यवाद"),
        ("telugu", "ధన్యవాదాలు"),
        ("tamil", "நன்றி"),
        ("kannada", "ಧನ್ಯವಾದಗಳು"),
        ("malayalam", "നന്ദി"),
        ("bengali", "ধন্যবাদ"),
        ("marathi", "धन्यवाद"),
        ("gujarati", "આભાર"),
        ("punjabi", "ਧੰਨਵਾਦ"),
        ("spanish", "gracias"),
        ("french", "merci"),
        ("german", "danke"),
        ("italian", "grazie"),
        ("portuguese", "obrigado"),
    ]),
    ("thank you very much", &[
        ("hindi", "बहुत बहुत धन्यवाद"),
        ("telugu", "చాలా ధన్యవాదాలు"),
        ("tamil", "மிக்க நன்றி"),
        ("spanish", "muchas gracias"),
        ("french", "merci beaucoup"),
        ("german", "vielen Dank"),
        ("italian", "grazie mille"),
        ("portuguese", "muito obrigado"),
    ]),
    ("good morning", &[
        ("hindi", "सुप्रभात"),
        ("telugu", "శుభోదయం"),
        ("tamil", "காலை வணக்கம்"),
        ("kannada", "ಶುಭೋದಯ"),
        ("malayalam", "സുപ്രഭാതം"),
        ("bengali", "সুপ্রভাত"),
        ("marathi", "सुप्रभात"),
        ("gujarati", "સુપ્રભાત"),
        ("punjabi", "ਸ਼ੁਭ ਸਵੇਰ"),
        ("spanish", "buenos días"),
        ("french", "bonjour"),
        ("german", "guten Morgen"),
        ("italian", "buongiorno"),
        ("portuguese", "bom dia"),
    ]),
    ("good evening", &[
        ("hindi", "शुभ संध्या"),
        ("spanish", "buenas tardes"),
        ("french", "bonsoir"),
        ("german", "guten Abend"),
        ("italian", "buonasera"),
        ("portuguese", "boa tarde"),
    ]),
    ("good night", &[
        ("hindi", "शुभ रात्रि"),
        ("telugu", "శుభ రాత్రి"),
        ("tamil", "இனிய இரவு"),
        ("kannada", "ಶುಭ ರಾತ್ರಿ"),
        ("malayalam", "ശുഭ രാത്രി"),
        ("bengali", "শুভ রাত্রি"),
        ("marathi", "शुभ रात्री"),
        ("gujarati", "શુભ રાત્રી"),
        ("punjabi", "ਸ਼ੁਭ ਰਾਤ"),
        ("spanish", "buenas noches"),
        ("french", "bonne nuit"),
        ("german", "gute Nacht"),
        ("italian", "buonanotte"),
        ("portuguese", "boa noite"),
    ]),
    ("how are you", &[
        ("hindi", "आप कैसे हैं"),
        ("telugu", "మీరు ఎలా ఉన్నారు"),
        ("tamil", "நீங்கள் எப்படி இருக்கிறீர்கள்"),
        ("kannada", "ನೀವು ಹೇಗಿದ್ದೀರಿ"),
        ("malayalam", "സുഖമാണോ"),
        ("bengali", "আপনি কেমন আছেন"),
        ("marathi", "तुम्ही कसे आहात"),
        ("gujarati", "તમે કેમ છો"),
        ("punjabi", "ਤੁਸੀਂ ਕਿਵੇਂ ਹੋ"),
        ("spanish", "cómo estás"),
        ("french", "comment ça va"),
        ("german", "wie geht es dir"),
        ("italian", "come stai"),
        ("portuguese", "como você está"),
    ]),
    ("i love you", &[
        ("hindi", "मैं तुमसे प्यार करता हूँ"),
        ("telugu", "నేను నిన్ను ప్రేమిస్తున్నాను"),
        ("tamil", "நான் உன்னை காதலிக்கிறேன்"),
        ("kannada", "ನಾನು ನಿನ್ನನ್ನು ಪ್ರೀತಿಸುತ್ತೇನೆ"),
        ("malayalam", "ഞാൻ നിന്നെ സ്നേഹിക്കുന്നു"),
        ("bengali", "আমি তোমাকে ভালোবাসি"),
        ("marathi", "माझं तुझ्यावर प्रेम आहे"),
        ("gujarati", "હું તને પ્રેમ કરું છું"),
        ("punjabi", "ਮੈਂ ਤੁਹਾਨੂੰ ਪਿਆਰ ਕਰਦਾ ਹਾਂ"),
        ("spanish", "te quiero"),
        ("french", "je t'aime"),
        ("german", "ich liebe dich"),
        ("italian", "ti amo"),
        ("portuguese", "eu te amo"),
    ]),
    ("i miss you", &[
        ("hindi", "मुझे तुम्हारी याद आती है"),
        ("bengali", "তোমাকে মনে পড়ছে"),
        ("spanish", "te extraño"),
        ("french", "tu me manques"),
        ("german", "ich vermisse dich"),
        ("italian", "mi manchi"),
        ("portuguese", "sinto sua falta"),
    ]),
    ("goodbye", &[
        ("hindi", "अलविदा"),
        ("telugu", "వెళ్ళొస్తాను"),
        ("tamil", "போய் வருகிறேன்"),
        ("kannada", "ಹೋಗಿ ಬರುತ್ತೇನೆ"),
        ("malayalam", "വിട"),
        ("bengali", "বিদায়"),
        ("marathi", "निरोप"),
        ("gujarati", "આવજો"),
        ("punjabi", "ਅਲਵਿਦਾ"),
        ("spanish", "adiós"),
        ("french", "au revoir"),
        ("german", "auf Wiedersehen"),
        ("italian", "arrivederci"),
        ("portuguese", "adeus"),
    ]),
    ("see you later", &[
        ("hindi", "फिर मिलेंगे"),
        ("spanish", "hasta luego"),
        ("french", "à plus tard"),
        ("german", "bis später"),
        ("italian", "a dopo"),
        ("portuguese", "até logo"),
    ]),
    ("what is your name", &[
        ("hindi", "आपका नाम क्या है"),
        ("telugu", "మీ పేరు ఏమిటి"),
        ("tamil", "உங்கள் பெயர் என்ன"),
        ("kannada", "ನಿಮ್ಮ ಹೆಸರೇನು"),
        ("malayalam", "നിങ്ങളുടെ പേര് എന്താണ്"),
        ("bengali", "আপনার নাম কী"),
        ("marathi", "तुमचे नाव काय आहे"),
        ("gujarati", "તમારું નામ શું છે"),
        ("punjabi", "ਤੁਹਾਡਾ ਨਾਮ ਕੀ ਹੈ"),
        ("spanish", "cómo te llamas"),
        ("french", "comment tu t'appelles"),
        ("german", "wie heißt du"),
        ("italian", "come ti chiami"),
        ("portuguese", "qual é o seu nome"),
    ]),
    ("welcome", &[
        ("hindi", "स्वागत है"),
        ("telugu", "స్వాగతం"),
        ("tamil", "வரவேற்கிறோம்"),
        ("kannada", "ಸ್ವಾಗತ"),
        ("malayalam", "സ്വാഗതം"),
        ("bengali", "স্বাগতম"),
        ("spanish", "bienvenido"),
        ("french", "bienvenue"),
        ("german", "willkommen"),
        ("italian", "benvenuto"),
        ("portuguese", "bem-vindo"),
    ]),
    ("sorry", &[
        ("hindi", "माफ़ कीजिए"),
        ("telugu", "క్షమించండి"),
        ("tamil", "மன்னிக்கவும்"),
        ("kannada", "ಕ್ಷಮಿಸಿ"),
        ("malayalam", "ക്ഷമിക്കണം"),
        ("bengali", "দুঃখিত"),
        ("marathi", "माफ करा"),
        ("gujarati", "માફ કરશો"),
        ("punjabi", "ਮਾਫ਼ ਕਰਨਾ"),
        ("spanish", "lo siento"),
        ("french", "désolé"),
        ("german", "Entschuldigung"),
        ("italian", "scusa"),
        ("portuguese", "desculpe"),
    ]),
    ("happy birthday", &[
        ("hindi", "जन्मदिन मुबारक"),
        ("telugu", "పుట్టినరోజు శుభాకాంక్షలు"),
        ("tamil", "பிறந்தநாள் வாழ்த்துக்கள்"),
        ("kannada", "ಹುಟ್ಟುಹಬ್ಬದ ಶುಭಾಶಯಗಳು"),
        ("malayalam", "ജന്മദിനാശംസകൾ"),
        ("bengali", "শুভ জন্মদিন"),
        ("marathi", "वाढदिवसाच्या शुभेच्छा"),
        ("gujarati", "જન્મદિવસની શુભકામનાઓ"),
        ("punjabi", "ਜਨਮਦਿਨ ਮੁਬਾਰਕ"),
        ("spanish", "feliz cumpleaños"),
        ("french", "joyeux anniversaire"),
        ("german", "alles Gute zum Geburtstag"),
        ("italian", "buon compleanno"),
        ("portuguese", "feliz aniversário"),
    ]),
    ("take care", &[
        ("hindi", "अपना ख्याल रखना"),
        ("telugu", "జాగ్రత్త"),
        ("tamil", "கவனமாக இருங்கள்"),
        ("bengali", "ভালো থেকো"),
        ("spanish", "cuídate"),
        ("french", "prends soin de toi"),
        ("german", "pass auf dich auf"),
        ("italian", "abbi cura di te"),
        ("portuguese", "se cuida"),
    ]),
];

/// Single words and short multi-word units for the token-wise pass
pub const WORDS: &[(&str, Translations)] = &[
    ("yes", &[
        ("hindi", "हाँ"),
        ("telugu", "అవును"),
        ("tamil", "ஆம்"),
        ("kannada", "ಹೌದು"),
        ("malayalam", "അതെ"),
        ("bengali", "হ্যাঁ"),
        ("marathi", "हो"),
        ("gujarati", "હા"),
        ("punjabi", "ਹਾਂ"),
        ("spanish", "sí"),
        ("french", "oui"),
        ("german", "ja"),
        ("italian", "sì"),
        ("portuguese", "sim"),
    ]),
    ("no", &[
        ("hindi", "नहीं"),
        ("telugu", "కాదు"),
        ("tamil", "இல்லை"),
        ("kannada", "ಇಲ್ಲ"),
        ("malayalam", "ഇല്ല"),
        ("bengali", "না"),
        ("marathi", "नाही"),
        ("gujarati", "ના"),
        ("punjabi", "ਨਹੀਂ"),
        ("spanish", "no"),
        ("french", "non"),
        ("german", "nein"),
        ("italian", "no"),
        ("portuguese", "não"),
    ]),
    ("friend", &[
        ("hindi", "दोस्त"),
        ("telugu", "స్నేహితుడు"),
        ("tamil", "நண்பன்"),
        ("kannada", "ಸ್ನೇಹಿತ"),
        ("malayalam", "സുഹൃത്ത്"),
        ("bengali", "বন্ধু"),
        ("marathi", "मित्र"),
        ("gujarati", "મિત્ર"),
        ("punjabi", "ਦੋਸਤ"),
        ("spanish", "amigo"),
        ("french", "ami"),
        ("german", "Freund"),
        ("italian", "amico"),
        ("portuguese", "amigo"),
    ]),
    ("love", &[
        ("hindi", "प्यार"),
        ("telugu", "ప్రేమ"),
        ("tamil", "காதல்"),
        ("kannada", "ಪ್ರೀತಿ"),
        ("malayalam", "സ്നേഹം"),
        ("bengali", "ভালোবাসা"),
        ("marathi", "प्रेम"),
        ("gujarati", "પ્રેમ"),
        ("punjabi", "ਪਿਆਰ"),
        ("spanish", "amor"),
        ("french", "amour"),
        ("german", "Liebe"),
        ("italian", "amore"),
        ("portuguese", "amor"),
    ]),
    ("water", &[
        ("hindi", "पानी"),
        ("telugu", "నీరు"),
        ("tamil", "தண்ணீர்"),
        ("kannada", "ನೀರು"),
        ("malayalam", "വെള്ളം"),
        ("bengali", "জল"),
        ("marathi", "पाणी"),
        ("gujarati", "પાણી"),
        ("punjabi", "ਪਾਣੀ"),
        ("spanish", "agua"),
        ("french", "eau"),
        ("german", "Wasser"),
        ("italian", "acqua"),
        ("portuguese", "água"),
    ]),
    ("food", &[
        ("hindi", "खाना"),
        ("telugu", "భోజనం"),
        ("tamil", "உணவு"),
        ("kannada", "ಊಟ"),
        ("malayalam", "ഭക്ഷണം"),
        ("bengali", "খাবার"),
        ("marathi", "जेवण"),
        ("gujarati", "ખોરાક"),
        ("punjabi", "ਖਾਣਾ"),
        ("spanish", "comida"),
        ("french", "nourriture"),
        ("german", "Essen"),
        ("italian", "cibo"),
        ("portuguese", "comida"),
    ]),
    ("home", &[
        ("hindi", "घर"),
        ("telugu", "ఇల్లు"),
        ("tamil", "வீடு"),
        ("kannada", "ಮನೆ"),
        ("malayalam", "വീട്"),
        ("bengali", "বাড়ি"),
        ("marathi", "घर"),
        ("gujarati", "ઘર"),
        ("punjabi", "ਘਰ"),
        ("spanish", "casa"),
        ("french", "maison"),
        ("german", "Zuhause"),
        ("italian", "casa"),
        ("portuguese", "casa"),
    ]),
    ("mother", &[
        ("hindi", "माँ"),
        ("telugu", "అమ్మ"),
        ("tamil", "அம்மா"),
        ("kannada", "ಅಮ್ಮ"),
        ("malayalam", "അമ്മ"),
        ("bengali", "মা"),
        ("marathi", "आई"),
        ("gujarati", "મા"),
        ("punjabi", "ਮਾਂ"),
        ("spanish", "madre"),
        ("french", "mère"),
        ("german", "Mutter"),
        ("italian", "madre"),
        ("portuguese", "mãe"),
    ]),
    ("father", &[
        ("hindi", "पिता"),
        ("telugu", "నాన్న"),
        ("tamil", "அப்பா"),
        ("kannada", "ಅಪ್ಪ"),
        ("malayalam", "അച്ഛൻ"),
        ("bengali", "বাবা"),
        ("marathi", "वडील"),
        ("gujarati", "પિતા"),
        ("punjabi", "ਪਿਤਾ"),
        ("spanish", "padre"),
        ("french", "père"),
        ("german", "Vater"),
        ("italian", "padre"),
        ("portuguese", "pai"),
    ]),
    ("brother", &[
        ("hindi", "भाई"),
        ("telugu", "అన్న"),
        ("tamil", "அண்ணா"),
        ("kannada", "ಅಣ್ಣ"),
        ("malayalam", "ചേട്ടൻ"),
        ("bengali", "ভাই"),
        ("marathi", "भाऊ"),
        ("gujarati", "ભાઈ"),
        ("punjabi", "ਭਰਾ"),
        ("spanish", "hermano"),
        ("french", "frère"),
        ("german", "Bruder"),
        ("italian", "fratello"),
        ("portuguese", "irmão"),
    ]),
    ("sister", &[
        ("hindi", "बहन"),
        ("telugu", "అక్క"),
        ("tamil", "அக்கா"),
        ("kannada", "ಅಕ್ಕ"),
        ("malayalam", "ചേച്ചി"),
        ("bengali", "বোন"),
        ("marathi", "बहीण"),
        ("gujarati", "બહેન"),
        ("punjabi", "ਭੈਣ"),
        ("spanish", "hermana"),
        ("french", "sœur"),
        ("german", "Schwester"),
        ("italian", "sorella"),
        ("portuguese", "irmã"),
    ]),
    ("today", &[
        ("hindi", "आज"),
        ("telugu", "ఈరోజు"),
        ("tamil", "இன்று"),
        ("kannada", "ಇಂದು"),
        ("malayalam", "ഇന്ന്"),
        ("bengali", "আজ"),
        ("marathi", "आज"),
        ("gujarati", "આજે"),
        ("punjabi", "ਅੱਜ"),
        ("spanish", "hoy"),
        ("french", "aujourd'hui"),
        ("german", "heute"),
        ("italian", "oggi"),
        ("portuguese", "hoje"),
    ]),
    ("tomorrow", &[
        ("hindi", "कल"),
        ("telugu", "రేపు"),
        ("tamil", "நாளை"),
        ("kannada", "ನಾಳೆ"),
        ("malayalam", "നാളെ"),
        ("bengali", "কাল"),
        ("marathi", "उद्या"),
        ("gujarati", "કાલે"),
        ("punjabi", "ਕੱਲ੍ਹ"),
        ("spanish", "mañana"),
        ("french", "demain"),
        ("german", "morgen"),
        ("italian", "domani"),
        ("portuguese", "amanhã"),
    ]),
    ("good", &[
        ("hindi", "अच्छा"),
        ("telugu", "మంచి"),
        ("tamil", "நல்ல"),
        ("kannada", "ಒಳ್ಳೆಯ"),
        ("malayalam", "നല്ല"),
        ("bengali", "ভালো"),
        ("marathi", "चांगले"),
        ("gujarati", "સારું"),
        ("punjabi", "ਚੰਗਾ"),
        ("spanish", "bueno"),
        ("french", "bon"),
        ("german", "gut"),
        ("italian", "buono"),
        ("portuguese", "bom"),
    ]),
    ("please", &[
        ("hindi", "कृपया"),
        ("telugu", "దయచేసి"),
        ("tamil", "தயவுசெய்து"),
        ("kannada", "ದಯವಿಟ್ಟು"),
        ("malayalam", "ദയവായി"),
        ("bengali", "দয়া করে"),
        ("marathi", "कृपया"),
        ("gujarati", "કૃપા કરીને"),
        ("punjabi", "ਕਿਰਪਾ ਕਰਕੇ"),
        ("spanish", "por favor"),
        ("french", "s'il vous plaît"),
        ("german", "bitte"),
        ("italian", "per favore"),
        ("portuguese", "por favor"),
    ]),
    ("how much", &[
        ("hindi", "कितना"),
        ("telugu", "ఎంత"),
        ("tamil", "எவ்வளவு"),
        ("spanish", "cuánto"),
        ("french", "combien"),
        ("german", "wie viel"),
        ("italian", "quanto"),
        ("portuguese", "quanto"),
    ]),
    ("what time", &[
        ("hindi", "कितने बजे"),
        ("spanish", "qué hora"),
        ("french", "quelle heure"),
        ("german", "wie spät"),
    ]),
    ("my friend", &[
        ("hindi", "मेरा दोस्त"),
        ("telugu", "నా స్నేహితుడు"),
        ("spanish", "mi amigo"),
        ("french", "mon ami"),
        ("german", "mein Freund"),
        ("italian", "il mio amico"),
        ("portuguese", "meu amigo"),
    ]),
];

/// Correct native spellings of frequent romanized chat words, per language
pub const ROMANIZED: &[(&str, &[(&str, &str)])] = &[
    ("hindi", &[
        ("namaste", "नमस्ते"),
        ("main", "मैं"),
        ("hai", "है"),
        ("hain", "हैं"),
        ("nahi", "नहीं"),
        ("kya", "क्या"),
        ("kaise", "कैसे"),
        ("ho", "हो"),
        ("aap", "आप"),
        ("tum", "तुम"),
        ("hum", "हम"),
        ("mera", "मेरा"),
        ("meri", "मेरी"),
        ("tera", "तेरा"),
        ("accha", "अच्छा"),
        ("bahut", "बहुत"),
        ("dost", "दोस्त"),
        ("pyar", "प्यार"),
        ("ghar", "घर"),
        ("kal", "कल"),
        ("aaj", "आज"),
        ("haan", "हाँ"),
        ("theek", "ठीक"),
        ("bhai", "भाई"),
        ("kahan", "कहाँ"),
        ("kyun", "क्यों"),
        ("aur", "और"),
        ("ji", "जी"),
        ("dhanyavad", "धन्यवाद"),
        ("shukriya", "शुक्रिया"),
    ]),
    ("marathi", &[
        ("namaskar", "नमस्कार"),
        ("mi", "मी"),
        ("tu", "तू"),
        ("kasa", "कसा"),
        ("ahe", "आहे"),
        ("nahi", "नाही"),
        ("ho", "हो"),
    ]),
    ("bengali", &[
        ("nomoskar", "নমস্কার"),
        ("ami", "আমি"),
        ("tumi", "তুমি"),
        ("kemon", "কেমন"),
        ("acho", "আছো"),
        ("bhalo", "ভালো"),
        ("na", "না"),
    ]),
    ("punjabi", &[
        ("main", "ਮੈਂ"),
        ("tusi", "ਤੁਸੀਂ"),
        ("ki", "ਕੀ"),
        ("haal", "ਹਾਲ"),
        ("theek", "ਠੀਕ"),
        ("hai", "ਹੈ"),
        ("pyaar", "ਪਿਆਰ"),
    ]),
    ("gujarati", &[
        ("kem", "કેમ"),
        ("cho", "છો"),
        ("majama", "મજામાં"),
        ("hu", "હું"),
        ("tame", "તમે"),
        ("aavjo", "આવજો"),
    ]),
    ("telugu", &[
        ("nenu", "నేను"),
        ("meeru", "మీరు"),
        ("nuvvu", "నువ్వు"),
        ("namaskaram", "నమస్కారం"),
        ("bagunnava", "బాగున్నావా"),
        ("bagundi", "బాగుంది"),
        ("enti", "ఏంటి"),
        ("avunu", "అవును"),
        ("ledu", "లేదు"),
        ("cheppu", "చెప్పు"),
        ("amma", "అమ్మ"),
        ("nanna", "నాన్న"),
        ("sare", "సరే"),
        ("ekkada", "ఎక్కడ"),
    ]),
    ("tamil", &[
        ("vanakkam", "வணக்கம்"),
        ("naan", "நான்"),
        ("nee", "நீ"),
        ("enna", "என்ன"),
        ("illa", "இல்ல"),
        ("amma", "அம்மா"),
        ("appa", "அப்பா"),
        ("nandri", "நன்றி"),
        ("sari", "சரி"),
        ("epdi", "எப்படி"),
        ("romba", "ரொம்ப"),
    ]),
    ("kannada", &[
        ("namaskara", "ನಮಸ್ಕಾರ"),
        ("naanu", "ನಾನು"),
        ("neenu", "ನೀನು"),
        ("houdu", "ಹೌದು"),
        ("illa", "ಇಲ್ಲ"),
        ("hege", "ಹೇಗೆ"),
        ("chennagide", "ಚೆನ್ನಾಗಿದೆ"),
        ("amma", "ಅಮ್ಮ"),
    ]),
    ("malayalam", &[
        ("namaskaram", "നമസ്കാരം"),
        ("njan", "ഞാൻ"),
        ("nee", "നീ"),
        ("sukhamano", "സുഖമാണോ"),
        ("alla", "അല്ല"),
        ("entha", "എന്താ"),
        ("amma", "അമ്മ"),
    ]),
];
