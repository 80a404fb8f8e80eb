// SPDX-License-Identifier: PMPL-1.0-or-later

//! The compiled-in ISO 639 table.
//!
//! 184 languages, ordered alphabetically by English name, reproduced
//! value-for-value from the reference code list at
//! <https://www.loc.gov/standards/iso639-2/php/code_list.php>. Names keep
//! their non-ASCII characters ("Māori", "Volapük") and grouped synonyms
//! ("Catalan, Valencian"). Codes are lowercase; the bibliographic column
//! differs from the terminology column for 20 legacy entries.

use crate::types::Language;

/// The default dataset backing [`Registry::new`](crate::Registry::new).
pub const LANGUAGES: &[Language] = &[
    Language::new("Abkhazian", "ab", "abk", "abk"),
    Language::new("Afar", "aa", "aar", "aar"),
    Language::new("Afrikaans", "af", "afr", "afr"),
    Language::new("Akan", "ak", "aka", "aka"),
    Language::new("Albanian", "sq", "sqi", "alb"),
    Language::new("Amharic", "am", "amh", "amh"),
    Language::new("Arabic", "ar", "ara", "ara"),
    Language::new("Aragonese", "an", "arg", "arg"),
    Language::new("Armenian", "hy", "hye", "arm"),
    Language::new("Assamese", "as", "asm", "asm"),
    Language::new("Avaric", "av", "ava", "ava"),
    Language::new("Avestan", "ae", "ave", "ave"),
    Language::new("Aymara", "ay", "aym", "aym"),
    Language::new("Azerbaijani", "az", "aze", "aze"),
    Language::new("Bambara", "bm", "bam", "bam"),
    Language::new("Bashkir", "ba", "bak", "bak"),
    Language::new("Basque", "eu", "eus", "baq"),
    Language::new("Belarusian", "be", "bel", "bel"),
    Language::new("Bengali", "bn", "ben", "ben"),
    Language::new("Bihari languages", "bh", "bih", "bih"),
    Language::new("Bislama", "bi", "bis", "bis"),
    Language::new("Bosnian", "bs", "bos", "bos"),
    Language::new("Breton", "br", "bre", "bre"),
    Language::new("Bulgarian", "bg", "bul", "bul"),
    Language::new("Burmese", "my", "mya", "bur"),
    Language::new("Catalan, Valencian", "ca", "cat", "cat"),
    Language::new("Chamorro", "ch", "cha", "cha"),
    Language::new("Chechen", "ce", "che", "che"),
    Language::new("Chichewa, Chewa, Nyanja", "ny", "nya", "nya"),
    Language::new("Chinese", "zh", "zho", "chi"),
    Language::new("Chuvash", "cv", "chv", "chv"),
    Language::new("Cornish", "kw", "cor", "cor"),
    Language::new("Corsican", "co", "cos", "cos"),
    Language::new("Cree", "cr", "cre", "cre"),
    Language::new("Croatian", "hr", "hrv", "hrv"),
    Language::new("Czech", "cs", "ces", "cze"),
    Language::new("Danish", "da", "dan", "dan"),
    Language::new("Divehi, Dhivehi, Maldivian", "dv", "div", "div"),
    Language::new("Dutch, Flemish", "nl", "nld", "dut"),
    Language::new("Dzongkha", "dz", "dzo", "dzo"),
    Language::new("English", "en", "eng", "eng"),
    Language::new("Esperanto", "eo", "epo", "epo"),
    Language::new("Estonian", "et", "est", "est"),
    Language::new("Ewe", "ee", "ewe", "ewe"),
    Language::new("Faroese", "fo", "fao", "fao"),
    Language::new("Fijian", "fj", "fij", "fij"),
    Language::new("Finnish", "fi", "fin", "fin"),
    Language::new("French", "fr", "fra", "fre"),
    Language::new("Fulah", "ff", "ful", "ful"),
    Language::new("Galician", "gl", "glg", "glg"),
    Language::new("Georgian", "ka", "kat", "geo"),
    Language::new("German", "de", "deu", "ger"),
    Language::new("Greek, Modern (1453–)", "el", "ell", "gre"),
    Language::new("Guarani", "gn", "grn", "grn"),
    Language::new("Gujarati", "gu", "guj", "guj"),
    Language::new("Haitian, Haitian Creole", "ht", "hat", "hat"),
    Language::new("Hausa", "ha", "hau", "hau"),
    Language::new("Hebrew", "he", "heb", "heb"),
    Language::new("Herero", "hz", "her", "her"),
    Language::new("Hindi", "hi", "hin", "hin"),
    Language::new("Hiri Motu", "ho", "hmo", "hmo"),
    Language::new("Hungarian", "hu", "hun", "hun"),
    Language::new("Interlingua (International Auxiliary Language Association)", "ia", "ina", "ina"),
    Language::new("Indonesian", "id", "ind", "ind"),
    Language::new("Interlingue, Occidental", "ie", "ile", "ile"),
    Language::new("Irish", "ga", "gle", "gle"),
    Language::new("Igbo", "ig", "ibo", "ibo"),
    Language::new("Inupiaq", "ik", "ipk", "ipk"),
    Language::new("Ido", "io", "ido", "ido"),
    Language::new("Icelandic", "is", "isl", "ice"),
    Language::new("Italian", "it", "ita", "ita"),
    Language::new("Inuktitut", "iu", "iku", "iku"),
    Language::new("Japanese", "ja", "jpn", "jpn"),
    Language::new("Javanese", "jv", "jav", "jav"),
    Language::new("Kalaallisut, Greenlandic", "kl", "kal", "kal"),
    Language::new("Kannada", "kn", "kan", "kan"),
    Language::new("Kanuri", "kr", "kau", "kau"),
    Language::new("Kashmiri", "ks", "kas", "kas"),
    Language::new("Kazakh", "kk", "kaz", "kaz"),
    Language::new("Central Khmer", "km", "khm", "khm"),
    Language::new("Kikuyu, Gikuyu", "ki", "kik", "kik"),
    Language::new("Kinyarwanda", "rw", "kin", "kin"),
    Language::new("Kirghiz, Kyrgyz", "ky", "kir", "kir"),
    Language::new("Komi", "kv", "kom", "kom"),
    Language::new("Kongo", "kg", "kon", "kon"),
    Language::new("Korean", "ko", "kor", "kor"),
    Language::new("Kurdish", "ku", "kur", "kur"),
    Language::new("Kuanyama, Kwanyama", "kj", "kua", "kua"),
    Language::new("Latin", "la", "lat", "lat"),
    Language::new("Luxembourgish, Letzeburgesch", "lb", "ltz", "ltz"),
    Language::new("Ganda", "lg", "lug", "lug"),
    Language::new("Limburgan, Limburger, Limburgish", "li", "lim", "lim"),
    Language::new("Lingala", "ln", "lin", "lin"),
    Language::new("Lao", "lo", "lao", "lao"),
    Language::new("Lithuanian", "lt", "lit", "lit"),
    Language::new("Luba-Katanga", "lu", "lub", "lub"),
    Language::new("Latvian", "lv", "lav", "lav"),
    Language::new("Manx", "gv", "glv", "glv"),
    Language::new("Macedonian", "mk", "mkd", "mac"),
    Language::new("Malagasy", "mg", "mlg", "mlg"),
    Language::new("Malay", "ms", "msa", "may"),
    Language::new("Malayalam", "ml", "mal", "mal"),
    Language::new("Maltese", "mt", "mlt", "mlt"),
    Language::new("Māori", "mi", "mri", "mao"),
    Language::new("Marathi", "mr", "mar", "mar"),
    Language::new("Marshallese", "mh", "mah", "mah"),
    Language::new("Mongolian", "mn", "mon", "mon"),
    Language::new("Nauru", "na", "nau", "nau"),
    Language::new("Navajo, Navaho", "nv", "nav", "nav"),
    Language::new("North Ndebele", "nd", "nde", "nde"),
    Language::new("Nepali", "ne", "nep", "nep"),
    Language::new("Ndonga", "ng", "ndo", "ndo"),
    Language::new("Norwegian Bokmål", "nb", "nob", "nob"),
    Language::new("Norwegian Nynorsk", "nn", "nno", "nno"),
    Language::new("Norwegian", "no", "nor", "nor"),
    Language::new("Sichuan Yi, Nuosu", "ii", "iii", "iii"),
    Language::new("South Ndebele", "nr", "nbl", "nbl"),
    Language::new("Occitan", "oc", "oci", "oci"),
    Language::new("Ojibwa", "oj", "oji", "oji"),
    Language::new("Church Slavic, Old Slavonic, Church Slavonic, Old Bulgarian, Old Church Slavonic", "cu", "chu", "chu"),
    Language::new("Oromo", "om", "orm", "orm"),
    Language::new("Oriya", "or", "ori", "ori"),
    Language::new("Ossetian, Ossetic", "os", "oss", "oss"),
    Language::new("Punjabi, Panjabi", "pa", "pan", "pan"),
    Language::new("Pali", "pi", "pli", "pli"),
    Language::new("Persian", "fa", "fas", "per"),
    Language::new("Polish", "pl", "pol", "pol"),
    Language::new("Pashto, Pushto", "ps", "pus", "pus"),
    Language::new("Portuguese", "pt", "por", "por"),
    Language::new("Quechua", "qu", "que", "que"),
    Language::new("Romansh", "rm", "roh", "roh"),
    Language::new("Rundi", "rn", "run", "run"),
    Language::new("Romanian, Moldavian, Moldovan", "ro", "ron", "rum"),
    Language::new("Russian", "ru", "rus", "rus"),
    Language::new("Sanskrit", "sa", "san", "san"),
    Language::new("Sardinian", "sc", "srd", "srd"),
    Language::new("Sindhi", "sd", "snd", "snd"),
    Language::new("Northern Sami", "se", "sme", "sme"),
    Language::new("Samoan", "sm", "smo", "smo"),
    Language::new("Sango", "sg", "sag", "sag"),
    Language::new("Serbian", "sr", "srp", "srp"),
    Language::new("Gaelic, Scottish Gaelic", "gd", "gla", "gla"),
    Language::new("Shona", "sn", "sna", "sna"),
    Language::new("Sinhala, Sinhalese", "si", "sin", "sin"),
    Language::new("Slovak", "sk", "slk", "slo"),
    Language::new("Slovenian", "sl", "slv", "slv"),
    Language::new("Somali", "so", "som", "som"),
    Language::new("Southern Sotho", "st", "sot", "sot"),
    Language::new("Spanish, Castilian", "es", "spa", "spa"),
    Language::new("Sundanese", "su", "sun", "sun"),
    Language::new("Swahili", "sw", "swa", "swa"),
    Language::new("Swati", "ss", "ssw", "ssw"),
    Language::new("Swedish", "sv", "swe", "swe"),
    Language::new("Tamil", "ta", "tam", "tam"),
    Language::new("Telugu", "te", "tel", "tel"),
    Language::new("Tajik", "tg", "tgk", "tgk"),
    Language::new("Thai", "th", "tha", "tha"),
    Language::new("Tigrinya", "ti", "tir", "tir"),
    Language::new("Tibetan", "bo", "bod", "tib"),
    Language::new("Turkmen", "tk", "tuk", "tuk"),
    Language::new("Tagalog", "tl", "tgl", "tgl"),
    Language::new("Tswana", "tn", "tsn", "tsn"),
    Language::new("Tonga (Tonga Islands)", "to", "ton", "ton"),
    Language::new("Turkish", "tr", "tur", "tur"),
    Language::new("Tsonga", "ts", "tso", "tso"),
    Language::new("Tatar", "tt", "tat", "tat"),
    Language::new("Twi", "tw", "twi", "twi"),
    Language::new("Tahitian", "ty", "tah", "tah"),
    Language::new("Uighur, Uyghur", "ug", "uig", "uig"),
    Language::new("Ukrainian", "uk", "ukr", "ukr"),
    Language::new("Urdu", "ur", "urd", "urd"),
    Language::new("Uzbek", "uz", "uzb", "uzb"),
    Language::new("Venda", "ve", "ven", "ven"),
    Language::new("Vietnamese", "vi", "vie", "vie"),
    Language::new("Volapük", "vo", "vol", "vol"),
    Language::new("Walloon", "wa", "wln", "wln"),
    Language::new("Welsh", "cy", "cym", "wel"),
    Language::new("Wolof", "wo", "wol", "wol"),
    Language::new("Western Frisian", "fy", "fry", "fry"),
    Language::new("Xhosa", "xh", "xho", "xho"),
    Language::new("Yiddish", "yi", "yid", "yid"),
    Language::new("Yoruba", "yo", "yor", "yor"),
    Language::new("Zhuang, Chuang", "za", "zha", "zha"),
    Language::new("Zulu", "zu", "zul", "zul"),
];
