//! Sample texts shared by tests across crates.
//!
//! The language samples are function-word-heavy prose so that the
//! trigram classifier has plenty of signal; they contain no digits, so
//! they also serve as no-op inputs for the redaction pipeline.

/// English prose sample.
pub const ENGLISH: &str = "The old house at the end of the street was the \
one that all of the children in the town would talk about, and over the \
years the stories grew with the telling until nobody was sure what was \
true and what was not.";

/// French prose sample.
pub const FRENCH: &str = "Le chien et le chat sont dans la maison avec \
les enfants et les parents de la famille, et dans les rues de la ville \
les gens parlent de la vie et des choses que le temps ne change pas.";

/// German prose sample.
pub const GERMAN: &str = "Der Hund und die Katze sind mit den Kindern in \
der Schule und nicht in dem Garten, und die Leute in der Stadt sprechen \
über das Wetter und über die Dinge, die sich nicht ändern.";

/// Spanish prose sample.
pub const SPANISH: &str = "El perro y el gato están en la casa con los \
niños y una de las personas de la ciudad, y en las calles la gente habla \
de la vida y de las cosas que el tiempo no cambia.";

/// Italian prose sample.
pub const ITALIAN: &str = "Il cane e il gatto sono nella casa con i \
bambini e una delle persone della città, e nelle strade la gente parla \
della vita e delle cose che il tempo non cambia.";

/// Portuguese prose sample.
pub const PORTUGUESE: &str = "O cão e o gato estão na casa com as \
crianças e uma das pessoas da cidade, e nas ruas as pessoas falam da \
vida e das coisas que o tempo não muda.";

/// Sample pairs of (ISO 639-1 code, text) for table-driven tests.
pub fn language_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("en", ENGLISH),
        ("fr", FRENCH),
        ("de", GERMAN),
        ("es", SPANISH),
        ("it", ITALIAN),
        ("pt", PORTUGUESE),
    ]
}
