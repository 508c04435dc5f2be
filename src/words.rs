//! Static vocabulary shared by both games.
//!
//! Guesser words are stored upper-case with `Ñ` as the only non-ASCII letter,
//! so lengths must be counted in chars.

use crate::games::wordle::WORD_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry
{
    pub word: &'static str,
    pub translation: &'static str,
}

impl WordEntry
{
    pub fn len(&self) -> usize
    {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool
    {
        self.word.is_empty()
    }
}

/// One conjugation prompt for the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge
{
    pub base_form: &'static str,
    pub pronoun: &'static str,
    pub tense: &'static str,
    pub translation: &'static str,
    pub expected_answer: &'static str,
}

const fn word(word: &'static str, translation: &'static str) -> WordEntry
{
    WordEntry { word, translation }
}

const fn verb(
    base_form: &'static str,
    pronoun: &'static str,
    tense: &'static str,
    translation: &'static str,
    expected_answer: &'static str,
) -> Challenge
{
    Challenge {
        base_form,
        pronoun,
        tense,
        translation,
        expected_answer,
    }
}

pub const SPANISH_WORDS: &[WordEntry] = &[
    word("PERRO", "dog"),
    word("MUNDO", "world"),
    word("PLAYA", "beach"),
    word("FUEGO", "fire"),
    word("LIBRO", "book"),
    word("NOCHE", "night"),
    word("CIELO", "sky"),
    word("CAMPO", "field"),
    word("DULCE", "sweet"),
    word("VERDE", "green"),
    word("NEGRO", "black"),
    word("LECHE", "milk"),
    word("CARNE", "meat"),
    word("ARROZ", "rice"),
    word("QUESO", "cheese"),
    word("PLATO", "plate"),
    word("SILLA", "chair"),
    word("PUNTO", "point"),
    word("TARDE", "afternoon"),
    word("BARCO", "boat"),
    word("TIGRE", "tiger"),
    word("LLAVE", "key"),
    word("LLAMA", "flame"),
    word("NIEVE", "snow"),
    word("PLUMA", "feather"),
    word("RELOJ", "clock"),
    word("HUEVO", "egg"),
    word("FRUTA", "fruit"),
    word("PIANO", "piano"),
    word("GORDO", "fat"),
    word("LARGO", "long"),
    word("CORTO", "short"),
    word("CALOR", "heat"),
    word("TORRE", "tower"),
    word("PARED", "wall"),
    word("PLAZA", "square"),
    word("CALLE", "street"),
    word("CARTA", "letter"),
    word("COCHE", "car"),
    word("PAPEL", "paper"),
    word("MUJER", "woman"),
    word("AMIGO", "friend"),
    word("SALSA", "sauce"),
    word("SUELO", "floor"),
    word("NUBES", "clouds"),
    word("LUNES", "Monday"),
    word("MARZO", "March"),
    word("ABRIL", "April"),
    word("JUNIO", "June"),
    word("JULIO", "July"),
    word("BAILE", "dance"),
    word("MENTE", "mind"),
    word("BRAZO", "arm"),
    word("BOLSA", "bag"),
    word("SUEÑO", "dream"),
    word("NIÑOS", "children"),
    word("DUEÑO", "owner"),
    word("OTOÑO", "autumn"),
    word("CASA", "house"),
    word("AGUA", "water"),
    word("SOL", "sun"),
    word("HOMBRE", "man"),
    word("BLANCO", "white"),
    word("TIEMPO", "time"),
    word("ESCUELA", "school"),
    word("VENTANA", "window"),
];

pub const VERB_CHALLENGES: &[Challenge] = &[
    verb("hablar", "yo", "presente", "to speak", "hablo"),
    verb("hablar", "tú", "presente", "to speak", "hablas"),
    verb("hablar", "nosotros", "pretérito", "to speak", "hablamos"),
    verb("hablar", "ella", "pretérito", "to speak", "habló"),
    verb("comer", "yo", "presente", "to eat", "como"),
    verb("comer", "ellos", "presente", "to eat", "comen"),
    verb("comer", "tú", "pretérito", "to eat", "comiste"),
    verb("comer", "él", "futuro", "to eat", "comerá"),
    verb("vivir", "nosotros", "presente", "to live", "vivimos"),
    verb("vivir", "yo", "pretérito", "to live", "viví"),
    verb("vivir", "ellas", "futuro", "to live", "vivirán"),
    verb("ser", "yo", "presente", "to be", "soy"),
    verb("ser", "tú", "presente", "to be", "eres"),
    verb("ser", "ellos", "presente", "to be", "son"),
    verb("ser", "él", "imperfecto", "to be", "era"),
    verb("estar", "yo", "presente", "to be", "estoy"),
    verb("estar", "ustedes", "presente", "to be", "están"),
    verb("estar", "yo", "pretérito", "to be", "estuve"),
    verb("tener", "yo", "presente", "to have", "tengo"),
    verb("tener", "ella", "presente", "to have", "tiene"),
    verb("tener", "nosotros", "pretérito", "to have", "tuvimos"),
    verb("ir", "yo", "presente", "to go", "voy"),
    verb("ir", "tú", "presente", "to go", "vas"),
    verb("ir", "ellos", "pretérito", "to go", "fueron"),
    verb("ir", "nosotros", "imperfecto", "to go", "íbamos"),
    verb("hacer", "yo", "presente", "to do", "hago"),
    verb("hacer", "él", "pretérito", "to do", "hizo"),
    verb("hacer", "tú", "futuro", "to do", "harás"),
    verb("poder", "yo", "presente", "to be able", "puedo"),
    verb("poder", "ellos", "presente", "to be able", "pueden"),
    verb("querer", "tú", "presente", "to want", "quieres"),
    verb("querer", "yo", "pretérito", "to want", "quise"),
    verb("decir", "yo", "presente", "to say", "digo"),
    verb("decir", "ella", "pretérito", "to say", "dijo"),
    verb("venir", "nosotros", "presente", "to come", "venimos"),
    verb("venir", "yo", "futuro", "to come", "vendré"),
    verb("saber", "yo", "presente", "to know", "sé"),
    verb("saber", "ustedes", "futuro", "to know", "sabrán"),
    verb("dormir", "él", "presente", "to sleep", "duerme"),
    verb("dormir", "ellos", "pretérito", "to sleep", "durmieron"),
    verb("jugar", "yo", "presente", "to play", "juego"),
    verb("jugar", "nosotros", "imperfecto", "to play", "jugábamos"),
    verb("escribir", "tú", "presente", "to write", "escribes"),
    verb("escribir", "yo", "pretérito", "to write", "escribí"),
    verb("leer", "ella", "pretérito", "to read", "leyó"),
    verb("leer", "nosotros", "presente", "to read", "leemos"),
    verb("salir", "yo", "presente", "to leave", "salgo"),
    verb("poner", "yo", "presente", "to put", "pongo"),
    verb("ver", "nosotros", "pretérito", "to see", "vimos"),
    verb("dar", "yo", "presente", "to give", "doy"),
];

/// Catalog entries usable by the guesser, in catalog order.
pub fn guess_words() -> Vec<WordEntry>
{
    words_of_length(SPANISH_WORDS, WORD_LENGTH)
}

pub fn words_of_length(catalog: &[WordEntry], len: usize) -> Vec<WordEntry>
{
    catalog
        .iter()
        .filter(|entry| entry.len() == len)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn guess_words_all_have_word_length()
    {
        let words = guess_words();
        assert!(!words.is_empty());
        assert!(words.iter().all(|entry| entry.len() == WORD_LENGTH));
    }

    #[test]
    fn enye_counts_as_one_letter()
    {
        let entry = word("SUEÑO", "dream");
        assert_eq!(entry.len(), 5);
        assert!(guess_words().contains(&entry));
    }

    #[test]
    fn filter_drops_other_lengths()
    {
        let words = guess_words();
        assert!(words.iter().all(|entry| entry.word != "ESCUELA"));
        assert!(words.len() < SPANISH_WORDS.len());
    }

    #[test]
    fn guess_words_use_the_supported_alphabet()
    {
        for entry in guess_words() {
            assert!(
                entry
                    .word
                    .chars()
                    .all(crate::games::wordle::is_supported_letter),
                "{} has unsupported letters",
                entry.word
            );
        }
    }

    #[test]
    fn challenges_have_answers()
    {
        assert!(!VERB_CHALLENGES.is_empty());
        assert!(VERB_CHALLENGES
            .iter()
            .all(|challenge| !challenge.expected_answer.trim().is_empty()));
    }
}
