use leksi_core::Language;

/// Spanish as the source language
#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish;

impl Language for Spanish {
    fn language_code(&self) -> &str {
        "es"
    }

    fn display_name(&self) -> &str {
        "Español"
    }

    fn person_labels(&self) -> &[&'static str] {
        &["yo", "tú", "él/ella/usted", "nosotros", "vosotros", "ellos/ellas/ustedes"]
    }

    fn phonetic_rules(&self) -> &[(&'static str, &'static str)] {
        // seseo and yeísmo
        &[
            ("v", "b"),
            ("z", "s"),
            ("ce", "se"),
            ("ci", "si"),
            ("ll", "y"),
            ("rr", "r"),
            ("qu", "k"),
            ("je", "ge"),
            ("ji", "gi"),
        ]
    }

    fn articles(&self) -> &[&'static str] {
        &["el ", "la ", "los ", "las ", "un ", "una ", "unos ", "unas "]
    }

    fn modal_verbs(&self) -> &[&'static str] {
        &[
            "puedo", "puedes", "puede", "podemos", "podéis", "pueden", "podía", "pude",
            "debo", "debes", "debe", "debemos", "debéis", "deben", "debería",
            "quiero", "quieres", "quiere", "queremos", "queréis", "quieren", "quería",
            "necesito", "necesitas", "necesita", "necesitamos", "necesitáis", "necesitan",
            "voy", "vas", "va", "vamos", "vais", "van",
        ]
    }

    fn pronoun_roles(&self) -> &[(&'static str, &'static str)] {
        &[
            ("yo", "yo"),
            ("tú", "tú"),
            ("él", "él/ella/usted"),
            ("ella", "él/ella/usted"),
            ("usted", "él/ella/usted"),
            ("nosotros", "nosotros"),
            ("nosotras", "nosotros"),
            ("vosotros", "vosotros"),
            ("vosotras", "vosotros"),
            ("ellos", "ellos/ellas/ustedes"),
            ("ellas", "ellos/ellas/ustedes"),
            ("ustedes", "ellos/ellas/ustedes"),
        ]
    }

    fn irregular_forms(&self) -> &[(&'static str, &'static str)] {
        &[
            ("soy", "ser"),
            ("eres", "ser"),
            ("es", "ser"),
            ("somos", "ser"),
            ("sois", "ser"),
            ("son", "ser"),
            ("era", "ser"),
            ("fue", "ser"),
            ("fui", "ser"),
            ("sido", "ser"),
            ("estoy", "estar"),
            ("estás", "estar"),
            ("está", "estar"),
            ("están", "estar"),
            ("estuve", "estar"),
            ("voy", "ir"),
            ("vas", "ir"),
            ("va", "ir"),
            ("vamos", "ir"),
            ("van", "ir"),
            ("iba", "ir"),
            ("tengo", "tener"),
            ("tienes", "tener"),
            ("tiene", "tener"),
            ("tienen", "tener"),
            ("tuve", "tener"),
            ("hago", "hacer"),
            ("hice", "hacer"),
            ("hizo", "hacer"),
            ("hecho", "hacer"),
            ("digo", "decir"),
            ("dice", "decir"),
            ("dije", "decir"),
            ("dicho", "decir"),
            ("puedo", "poder"),
            ("puede", "poder"),
            ("pude", "poder"),
            ("quiero", "querer"),
            ("quiere", "querer"),
            ("quise", "querer"),
            ("sé", "saber"),
            ("supe", "saber"),
            ("hay", "haber"),
            ("he", "haber"),
            ("has", "haber"),
            ("ha", "haber"),
            ("han", "haber"),
            ("vengo", "venir"),
            ("viene", "venir"),
            ("vine", "venir"),
            ("pongo", "poner"),
            ("puse", "poner"),
            ("puesto", "poner"),
            ("salgo", "salir"),
            ("doy", "dar"),
            ("di", "dar"),
            ("veo", "ver"),
            ("vi", "ver"),
            ("visto", "ver"),
            ("escrito", "escribir"),
            ("abierto", "abrir"),
            ("muerto", "morir"),
        ]
    }

    fn citation_endings(&self) -> &[&'static str] {
        &["", "ar", "er", "ir", "o", "a"]
    }

    fn basic_features(&self) -> &[&'static str] {
        &["grammar_presens", "grammar_plural"]
    }
}
