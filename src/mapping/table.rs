//! Character-equivalence rows across all supported scripts.
//!
//! Each row lists the same character in every script, ordered by
//! [`super::COLUMNS`]. Full rows have 20 cells; the Sanskrit-extension rows
//! carry only the Sinhala / Devanagari / Roman triple. An empty cell means
//! the script has no explicit glyph there (the Roman and Cyrillic virama is
//! handled algorithmically by the vowel transform instead).
//!
//! The data is deliberately columnar: the aligned rows are the reviewable
//! form of the tables, and `validate_mappings` cross-checks every cell
//! against its column's registered codepoint ranges at load.

pub(crate) type Row = &'static [&'static str];

/// Independent vowels, niggahita/visarga, virama and digits.
#[rustfmt::skip]
pub(crate) static SPECIALS: &[Row] = &[
    // independent vowels
    &["අ", "अ", "a", "อ", "ອ", "အ", "អ", "অ", "ਅ", "ᩋ", "અ", "అ", "ಅ", "അ", "𑀅", "ཨ", "𑄃", "ꦄ", "ᬅ", "а"],
    &["ආ", "आ", "ā", "อา", "ອາ", "အာ", "អា", "আ", "ਆ", "ᩌ", "આ", "ఆ", "ಆ", "ആ", "𑀆", "ཨཱ", "𑄃𑄂", "ꦄꦴ", "ᬆ", "а̄"],
    &["ඉ", "इ", "i", "อิ", "ອິ", "ဣ", "ឥ", "ই", "ਇ", "ᩍ", "ઇ", "ఇ", "ಇ", "ഇ", "𑀇", "ཨི", "𑄄", "ꦆ", "ᬇ", "и"],
    &["ඊ", "ई", "ī", "อี", "ອີ", "ဤ", "ឦ", "ঈ", "ਈ", "ᩎ", "ઈ", "ఈ", "ಈ", "ഈ", "𑀈", "ཨཱི", "𑄃𑄩", "ꦇ", "ᬈ", "ӣ"],
    &["උ", "उ", "u", "อุ", "ອຸ", "ဥ", "ឧ", "উ", "ਉ", "ᩏ", "ઉ", "ఉ", "ಉ", "ഉ", "𑀉", "ཨུ", "𑄅", "ꦈ", "ᬉ", "у"],
    &["ඌ", "ऊ", "ū", "อู", "ອູ", "ဦ", "ឩ", "ঊ", "ਊ", "ᩐ", "ઊ", "ఊ", "ಊ", "ഊ", "𑀊", "ཨཱུ", "𑄃𑄫", "ꦈꦴ", "ᬊ", "ӯ"],
    &["එ", "ए", "e", "อเ", "ອເ", "ဧ", "ឯ", "এ", "ਏ", "ᩑ", "એ", "ఏ", "ಏ", "ഏ", "𑀏", "ཨེ", "𑄆", "ꦌ", "ᬏ", "е"],
    &["ඔ", "ओ", "o", "อโ", "ອໂ", "ဩ", "ឱ", "ও", "ਓ", "ᩒ", "ઓ", "ఓ", "ಓ", "ഓ", "𑀑", "ཨོ", "𑄃𑄮", "ꦎ", "ᬑ", "о"],
    // niggahita (anusvara)
    &["ං", "ं", "ṃ", "ํ", "ໍ", "ံ", "ំ", "ং", "ਂ", "ᩴ", "ં", "ం", "ಂ", "ം", "𑀁", "ཾ", "𑄁", "ꦁ", "ᬂ", "м̣"],
    // visarga - not found in Pali but present in Devanagari source texts
    &["ඃ", "ः", "ḥ", "ะ", "ະ", "း", "ះ", "ঃ", "ਃ", "ᩡ", "ઃ", "ః", "ಃ", "ഃ", "𑀂", "ཿ", "𑄂", "ꦃ", "ᬄ", "х̣"],
    // virama - no explicit glyph in the alphabetic scripts
    &["්", "्", "", "ฺ", "຺", "္", "្", "্", "੍", "᩠", "્", "్", "್", "്", "𑁆", "྄", "𑄴", "꧀", "᭄", ""],
    // digits
    &["0", "०", "0", "๐", "໐", "၀", "០", "০", "੦", "᪐", "૦", "౦", "೦", "൦", "𑁦", "༠", "𑄶", "꧐", "᭐", "0"],
    &["1", "१", "1", "๑", "໑", "၁", "១", "১", "੧", "᪑", "૧", "౧", "೧", "൧", "𑁧", "༡", "𑄷", "꧑", "᭑", "1"],
    &["2", "२", "2", "๒", "໒", "၂", "២", "২", "੨", "᪒", "૨", "౨", "೨", "൨", "𑁨", "༢", "𑄸", "꧒", "᭒", "2"],
    &["3", "३", "3", "๓", "໓", "၃", "៣", "৩", "੩", "᪓", "૩", "౩", "೩", "൩", "𑁩", "༣", "𑄹", "꧓", "᭓", "3"],
    &["4", "४", "4", "๔", "໔", "၄", "៤", "৪", "੪", "᪔", "૪", "౪", "೪", "൪", "𑁪", "༤", "𑄺", "꧔", "᭔", "4"],
    &["5", "५", "5", "๕", "໕", "၅", "៥", "৫", "੫", "᪕", "૫", "౫", "೫", "൫", "𑁫", "༥", "𑄻", "꧕", "᭕", "5"],
    &["6", "६", "6", "๖", "໖", "၆", "៦", "৬", "੬", "᪖", "૬", "౬", "೬", "൬", "𑁬", "༦", "𑄼", "꧖", "᭖", "6"],
    &["7", "७", "7", "๗", "໗", "၇", "៧", "৭", "੭", "᪗", "૭", "౭", "೭", "൭", "𑁭", "༧", "𑄽", "꧗", "᭗", "7"],
    &["8", "८", "8", "๘", "໘", "၈", "៨", "৮", "੮", "᪘", "૮", "౮", "೮", "൮", "𑁮", "༨", "𑄾", "꧘", "᭘", "8"],
    &["9", "९", "9", "๙", "໙", "၉", "៩", "৯", "੯", "᪙", "૯", "౯", "೯", "൯", "𑁯", "༩", "𑄿", "꧙", "᭙", "9"],
    // Sanskrit-only independent vowels
    &["ඓ", "ऐ", "ai"],
    &["ඖ", "औ", "au"],
    &["ඍ", "ऋ", "ṛ"],
    &["ඎ", "ॠ", "ṝ"],
    &["ඏ", "ऌ", "l̥"],
    &["ඐ", "ॡ", "ḹ"],
];

/// Consonants.
#[rustfmt::skip]
pub(crate) static CONSONANTS: &[Row] = &[
    // velar stops
    &["ක", "क", "k", "ก", "ກ", "က", "ក", "ক", "ਕ", "ᨠ", "ક", "క", "ಕ", "ക", "𑀓", "ཀ", "𑄇", "ꦏ", "ᬓ", "к"],
    &["ඛ", "ख", "kh", "ข", "ຂ", "ခ", "ខ", "খ", "ਖ", "ᨡ", "ખ", "ఖ", "ಖ", "ഖ", "𑀔", "ཁ", "𑄈", "ꦑ", "ᬔ", "кх"],
    &["ග", "ग", "g", "ค", "ຄ", "ဂ", "គ", "গ", "ਗ", "ᨣ", "ગ", "గ", "ಗ", "ഗ", "𑀕", "ག", "𑄉", "ꦒ", "ᬕ", "г"],
    &["ඝ", "घ", "gh", "ฆ", "ຆ", "ဃ", "ឃ", "ঘ", "ਘ", "ᨥ", "ઘ", "ఘ", "ಘ", "ഘ", "𑀖", "གྷ", "𑄊", "ꦓ", "ᬖ", "гх"],
    &["ඞ", "ङ", "ṅ", "ง", "ງ", "င", "ង", "ঙ", "ਙ", "ᨦ", "ઙ", "ఙ", "ಙ", "ങ", "𑀗", "ང", "𑄋", "ꦔ", "ᬗ", "н̇"],
    // palatal stops
    &["ච", "च", "c", "จ", "ຈ", "စ", "ច", "চ", "ਚ", "ᨧ", "ચ", "చ", "ಚ", "ച", "𑀘", "ཙ", "𑄌", "ꦕ", "ᬘ", "ч"],
    &["ඡ", "छ", "ch", "ฉ", "ຉ", "ဆ", "ឆ", "ছ", "ਛ", "ᨨ", "છ", "ఛ", "ಛ", "ഛ", "𑀙", "ཚ", "𑄍", "ꦖ", "ᬙ", "чх"],
    &["ජ", "ज", "j", "ช", "ຊ", "ဇ", "ជ", "জ", "ਜ", "ᨩ", "જ", "జ", "ಜ", "ജ", "𑀚", "ཛ", "𑄎", "ꦗ", "ᬚ", "дж"],
    &["ඣ", "झ", "jh", "ฌ", "ຌ", "ဈ", "ឈ", "ঝ", "ਝ", "ᨫ", "ઝ", "ఝ", "ಝ", "ഝ", "𑀛", "ཛྷ", "𑄏", "ꦙ", "ᬛ", "джх"],
    &["ඤ", "ञ", "ñ", "ญ", "ຎ", "ဉ", "ញ", "ঞ", "ਞ", "ᨬ", "ઞ", "ఞ", "ಞ", "ഞ", "𑀜", "ཉ", "𑄐", "ꦚ", "ᬜ", "н̃"],
    // retroflex stops
    &["ට", "ट", "ṭ", "ฏ", "ຏ", "ဋ", "ដ", "ট", "ਟ", "ᨭ", "ટ", "ట", "ಟ", "ട", "𑀝", "ཊ", "𑄑", "ꦛ", "ᬝ", "т̣"],
    &["ඨ", "ठ", "ṭh", "ฐ", "ຐ", "ဌ", "ឋ", "ঠ", "ਠ", "ᨮ", "ઠ", "ఠ", "ಠ", "ഠ", "𑀞", "ཋ", "𑄒", "ꦜ", "ᬞ", "т̣х"],
    &["ඩ", "ड", "ḍ", "ฑ", "ຑ", "ဍ", "ឌ", "ড", "ਡ", "ᨯ", "ડ", "డ", "ಡ", "ഡ", "𑀟", "ཌ", "𑄓", "ꦝ", "ᬟ", "д̣"],
    &["ඪ", "ढ", "ḍh", "ฒ", "ຒ", "ဎ", "ឍ", "ঢ", "ਢ", "ᨰ", "ઢ", "ఢ", "ಢ", "ഢ", "𑀠", "ཌྷ", "𑄔", "ꦞ", "ᬠ", "д̣х"],
    &["ණ", "ण", "ṇ", "ณ", "ຓ", "ဏ", "ណ", "ণ", "ਣ", "ᨱ", "ણ", "ణ", "ಣ", "ണ", "𑀡", "ཎ", "𑄕", "ꦟ", "ᬡ", "н̣"],
    // dental stops
    &["ත", "त", "t", "ต", "ຕ", "တ", "ត", "ত", "ਤ", "ᨲ", "ત", "త", "ತ", "ത", "𑀢", "ཏ", "𑄖", "ꦠ", "ᬢ", "т"],
    &["ථ", "थ", "th", "ถ", "ຖ", "ထ", "ថ", "থ", "ਥ", "ᨳ", "થ", "థ", "ಥ", "ഥ", "𑀣", "ཐ", "𑄗", "ꦡ", "ᬣ", "тх"],
    &["ද", "द", "d", "ท", "ທ", "ဒ", "ទ", "দ", "ਦ", "ᨴ", "દ", "ద", "ದ", "ദ", "𑀤", "ད", "𑄘", "ꦢ", "ᬤ", "д"],
    &["ධ", "ध", "dh", "ธ", "ຘ", "ဓ", "ធ", "ধ", "ਧ", "ᨵ", "ધ", "ధ", "ಧ", "ധ", "𑀥", "དྷ", "𑄙", "ꦣ", "ᬥ", "дх"],
    &["න", "न", "n", "น", "ນ", "န", "ន", "ন", "ਨ", "ᨶ", "ન", "న", "ನ", "ന", "𑀦", "ན", "𑄚", "ꦤ", "ᬦ", "н"],
    // labial stops
    &["ප", "प", "p", "ป", "ປ", "ပ", "ប", "প", "ਪ", "ᨸ", "પ", "ప", "ಪ", "പ", "𑀧", "པ", "𑄛", "ꦥ", "ᬧ", "п"],
    &["ඵ", "फ", "ph", "ผ", "ຜ", "ဖ", "ផ", "ফ", "ਫ", "ᨹ", "ફ", "ఫ", "ಫ", "ഫ", "𑀨", "ཕ", "𑄜", "ꦦ", "ᬨ", "пх"],
    &["බ", "ब", "b", "พ", "ພ", "ဗ", "ព", "ব", "ਬ", "ᨻ", "બ", "బ", "ಬ", "ബ", "𑀩", "བ", "𑄝", "ꦧ", "ᬩ", "б"],
    &["භ", "भ", "bh", "ภ", "ຠ", "ဘ", "ភ", "ভ", "ਭ", "ᨽ", "ભ", "భ", "ಭ", "ഭ", "𑀪", "བྷ", "𑄞", "ꦨ", "ᬪ", "бх"],
    &["ම", "म", "m", "ม", "ມ", "မ", "ម", "ম", "ਮ", "ᨾ", "મ", "మ", "ಮ", "മ", "𑀫", "མ", "𑄟", "ꦩ", "ᬫ", "м"],
    // liquids, fricatives
    &["ය", "य", "y", "ย", "ຍ", "ယ", "យ", "য", "ਯ", "ᨿ", "ય", "య", "ಯ", "യ", "𑀬", "ཡ", "𑄡", "ꦪ", "ᬬ", "й"],
    &["ර", "र", "r", "ร", "ຣ", "ရ", "រ", "র", "ਰ", "ᩁ", "ર", "ర", "ರ", "ര", "𑀭", "ར", "𑄢", "ꦫ", "ᬭ", "р"],
    &["ල", "ल", "l", "ล", "ລ", "လ", "ល", "ল", "ਲ", "ᩃ", "લ", "ల", "ಲ", "ല", "𑀮", "ལ", "𑄣", "ꦭ", "ᬮ", "л"],
    &["ළ", "ळ", "ḷ", "ฬ", "ຬ", "ဠ", "ឡ", "ল়", "ਲ਼", "ᩊ", "ળ", "ళ", "ಳ", "ള", "𑀴", "ལ༹", "𑅄", "ꦭ꦳", "ᬮ᬴", "л̣"],
    &["ව", "व", "v", "ว", "ວ", "ဝ", "វ", "ৰ", "ਵ", "ᩅ", "વ", "వ", "ವ", "വ", "𑀯", "ཝ", "𑄤", "ꦮ", "ᬯ", "в"],
    &["ස", "स", "s", "ส", "ສ", "သ", "ស", "স", "ਸ", "ᩈ", "સ", "స", "ಸ", "സ", "𑀲", "ས", "𑄥", "ꦱ", "ᬲ", "с"],
    &["හ", "ह", "h", "ห", "ຫ", "ဟ", "ហ", "হ", "ਹ", "ᩉ", "હ", "హ", "ಹ", "ഹ", "𑀳", "ཧ", "𑄦", "ꦲ", "ᬳ", "х"],
    // Sanskrit-only consonants
    &["ශ", "श", "ś"],
    &["ෂ", "ष", "ş"],
];

/// Dependent vowel signs. Skipped when converting from Roman or Cyrillic,
/// which have no dependent signs; the vowel transform reconstructs them.
#[rustfmt::skip]
pub(crate) static VOWELS: &[Row] = &[
    &["ා", "ा", "ā", "า", "າ", "ာ", "ា", "া", "ਾ", "ᩣ", "ા", "ా", "ಾ", "ാ", "𑀸", "ཱ", "𑄧", "ꦴ", "ᬵ", "а̄"],
    &["ි", "ि", "i", "ิ", "ິ", "ိ", "ិ", "ি", "ਿ", "ᩥ", "િ", "ి", "ಿ", "ി", "𑀺", "ི", "𑄨", "ꦶ", "ᬶ", "и"],
    &["ී", "ी", "ī", "ี", "ີ", "ီ", "ី", "ী", "ੀ", "ᩦ", "ી", "ీ", "ೀ", "ീ", "𑀻", "ཱི", "𑄩", "ꦷ", "ᬷ", "ӣ"],
    &["ු", "ु", "u", "ุ", "ຸ", "ု", "ុ", "ু", "ੁ", "ᩩ", "ુ", "ు", "ು", "ു", "𑀼", "ུ", "𑄪", "ꦸ", "ᬸ", "у"],
    &["ූ", "ू", "ū", "ู", "ູ", "ူ", "ូ", "ূ", "ੂ", "ᩪ", "ૂ", "ూ", "ೂ", "ൂ", "𑀽", "ཱུ", "𑄫", "ꦹ", "ᬹ", "ӯ"],
    // Thai and Lao write e and o in front of the consonant; the reorder
    // rule in beautify produces that visual order.
    &["ෙ", "े", "e", "เ", "ເ", "ေ", "េ", "ে", "ੇ", "ᩮ", "ે", "ే", "ೇ", "േ", "𑁂", "ེ", "𑄬", "ꦺ", "ᬾ", "е"],
    &["ො", "ो", "o", "โ", "ໂ", "ော", "ោ", "ো", "ੋ", "ᩮᩣ", "ો", "ో", "ೋ", "ോ", "𑁄", "ོ", "𑄮", "ꦺꦴ", "ᭀ", "о"],
    // Sanskrit-only dependent vowels
    &["ෛ", "ै", "ai"],
    &["ෞ", "ौ", "au"],
    &["ෘ", "ृ", "ṛ"],
    &["ෲ", "ॄ", "ṝ"],
    &["ෟ", "ॢ", "l̥"],
    &["ෳ", "ॣ", "ḹ"],
];
