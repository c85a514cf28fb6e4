/// Strong and mixed verb forms the suffix heuristic cannot reach,
/// mapped to their infinitive
pub const IRREGULAR_FORMS: &[(&str, &str)] = &[
    // sein
    ("bin", "sein"),
    ("bist", "sein"),
    ("ist", "sein"),
    ("sind", "sein"),
    ("seid", "sein"),
    ("war", "sein"),
    ("warst", "sein"),
    ("waren", "sein"),
    ("wart", "sein"),
    ("gewesen", "sein"),
    // haben
    ("hast", "haben"),
    ("hat", "haben"),
    ("hatte", "haben"),
    ("hatten", "haben"),
    ("gehabt", "haben"),
    // werden
    ("wurde", "werden"),
    ("wurden", "werden"),
    ("geworden", "werden"),
    // wissen
    ("weiß", "wissen"),
    ("weißt", "wissen"),
    ("wusste", "wissen"),
    ("gewusst", "wissen"),
    // strong verbs
    ("ging", "gehen"),
    ("gingen", "gehen"),
    ("gegangen", "gehen"),
    ("kam", "kommen"),
    ("kamen", "kommen"),
    ("gekommen", "kommen"),
    ("sah", "sehen"),
    ("sieht", "sehen"),
    ("gesehen", "sehen"),
    ("nahm", "nehmen"),
    ("nimmt", "nehmen"),
    ("genommen", "nehmen"),
    ("gab", "geben"),
    ("gibt", "geben"),
    ("gegeben", "geben"),
    ("aß", "essen"),
    ("isst", "essen"),
    ("gegessen", "essen"),
    ("trank", "trinken"),
    ("getrunken", "trinken"),
    ("las", "lesen"),
    ("liest", "lesen"),
    ("gelesen", "lesen"),
    ("fuhr", "fahren"),
    ("fährt", "fahren"),
    ("gefahren", "fahren"),
    ("lief", "laufen"),
    ("läuft", "laufen"),
    ("gelaufen", "laufen"),
    ("schrieb", "schreiben"),
    ("geschrieben", "schreiben"),
    ("sprach", "sprechen"),
    ("spricht", "sprechen"),
    ("gesprochen", "sprechen"),
    ("fand", "finden"),
    ("gefunden", "finden"),
    ("stand", "stehen"),
    ("gestanden", "stehen"),
    ("blieb", "bleiben"),
    ("geblieben", "bleiben"),
    ("half", "helfen"),
    ("hilft", "helfen"),
    ("geholfen", "helfen"),
    ("schlief", "schlafen"),
    ("schläft", "schlafen"),
    ("geschlafen", "schlafen"),
    // mixed verbs
    ("dachte", "denken"),
    ("gedacht", "denken"),
    ("brachte", "bringen"),
    ("gebracht", "bringen"),
    ("kannte", "kennen"),
    ("gekannt", "kennen"),
];
