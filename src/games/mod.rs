pub mod runner;
pub mod wordle;

use crate::words;

pub struct GameDescriptor
{
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Catalog size shown next to the description.
    pub stats: String,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![
        GameDescriptor {
            name: "wordle",
            title: "Spanish Wordle",
            description: "Guess the 5-letter Spanish word in 5 tries",
            stats: format!("{} words", words::guess_words().len()),
        },
        GameDescriptor {
            name: "runner",
            title: "Verb Runner",
            description: "Conjugate falling verbs before they hit the ground",
            stats: format!("{} verbs", words::VERB_CHALLENGES.len()),
        },
    ]
}

pub fn find(name: &str) -> Option<GameDescriptor>
{
    registry()
        .into_iter()
        .find(|game| game.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn registry_lists_both_games()
    {
        let names: Vec<_> = registry().iter().map(|game| game.name).collect();
        assert_eq!(names, ["wordle", "runner"]);
    }

    #[test]
    fn find_ignores_case()
    {
        assert_eq!(find("Runner").map(|game| game.title), Some("Verb Runner"));
        assert!(find("typing").is_none());
    }

    #[test]
    fn stats_reflect_catalog_sizes()
    {
        let wordle = find("wordle").unwrap();
        assert_eq!(wordle.stats, format!("{} words", words::guess_words().len()));
    }
}
