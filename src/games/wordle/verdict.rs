use std::collections::HashMap;

/// How a guessed letter relates to the target.
///
/// Ordered by strength so the keyboard can keep the best verdict with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterVerdict
{
    Absent,
    Present,
    Correct,
}

/// Scores `guess` against `target`.
///
/// Exact matches are taken first; the target letters they did not consume are
/// then handed out left to right, so a letter is never credited more often than
/// it occurs in the target. Guess positions past the end of `target` are absent.
pub fn evaluate(guess: &[char], target: &[char]) -> Vec<LetterVerdict>
{
    let mut verdicts = vec![LetterVerdict::Absent; guess.len()];
    let mut remaining: HashMap<char, usize> = HashMap::new();

    for (i, &letter) in target.iter().enumerate() {
        if guess.get(i) == Some(&letter) {
            verdicts[i] = LetterVerdict::Correct;
        } else {
            *remaining.entry(letter).or_insert(0) += 1;
        }
    }

    for (i, letter) in guess.iter().enumerate() {
        if verdicts[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter) {
            if *count > 0 {
                verdicts[i] = LetterVerdict::Present;
                *count -= 1;
            }
        }
    }

    verdicts
}

/// One submitted guess with its verdicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow
{
    tiles: Vec<(char, LetterVerdict)>,
}

impl GuessRow
{
    pub fn score(guess: &str, target: &str) -> Self
    {
        let guess: Vec<char> = guess.chars().collect();
        let target: Vec<char> = target.chars().collect();
        let verdicts = evaluate(&guess, &target);
        Self {
            tiles: guess.into_iter().zip(verdicts).collect(),
        }
    }

    pub fn tiles(&self) -> &[(char, LetterVerdict)]
    {
        &self.tiles
    }

    pub fn word(&self) -> String
    {
        self.tiles.iter().map(|(letter, _)| letter).collect()
    }

    pub fn is_solved(&self) -> bool
    {
        !self.tiles.is_empty()
            && self
                .tiles
                .iter()
                .all(|(_, verdict)| *verdict == LetterVerdict::Correct)
    }
}

/// Best verdict seen for each letter across all guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState
{
    letters: HashMap<char, LetterVerdict>,
}

impl KeyboardState
{
    pub fn get(&self, letter: char) -> Option<LetterVerdict>
    {
        self.letters.get(&letter).copied()
    }

    /// Records `verdict` unless the letter already holds a stronger one.
    pub fn upgrade(&mut self, letter: char, verdict: LetterVerdict)
    {
        let entry = self.letters.entry(letter).or_insert(verdict);
        if verdict > *entry {
            *entry = verdict;
        }
    }

    pub fn apply(&mut self, row: &GuessRow)
    {
        for &(letter, verdict) in row.tiles() {
            self.upgrade(letter, verdict);
        }
    }

    pub fn clear(&mut self)
    {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests
{
    use super::LetterVerdict::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> Vec<LetterVerdict>
    {
        let guess: Vec<char> = guess.chars().collect();
        let target: Vec<char> = target.chars().collect();
        evaluate(&guess, &target)
    }

    fn credits(verdicts: &[LetterVerdict]) -> usize
    {
        verdicts.iter().filter(|v| **v != Absent).count()
    }

    #[test]
    fn exact_match_is_all_correct()
    {
        assert_eq!(eval("PERRO", "PERRO"), vec![Correct; 5]);
    }

    #[test]
    fn misplaced_letters_are_present()
    {
        assert_eq!(
            eval("CARTA", "TARDE"),
            vec![Absent, Correct, Correct, Present, Absent]
        );
    }

    #[test]
    fn repeated_guess_letter_is_credited_once_per_target_letter()
    {
        let verdicts = eval("BBBBB", "ABABA");
        assert_eq!(verdicts, vec![Absent, Correct, Absent, Correct, Absent]);
        assert_eq!(credits(&verdicts), 2);
    }

    #[test]
    fn correct_positions_take_priority_over_earlier_presents()
    {
        // The second L is exact, so the leading A and L only get what is left.
        assert_eq!(
            eval("ALLOY", "LLAMA"),
            vec![Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn credits_never_exceed_target_count()
    {
        let verdicts = eval("LLANO", "LLAMA");
        assert_eq!(verdicts, vec![Correct, Correct, Correct, Absent, Absent]);
        let verdicts = eval("AAAAA", "LLAMA");
        assert_eq!(credits(&verdicts), 2);
    }

    #[test]
    fn enye_is_its_own_letter()
    {
        assert_eq!(
            eval("SUEÑO", "DUEÑO"),
            vec![Absent, Correct, Correct, Correct, Correct]
        );
        assert_eq!(eval("NIÑOS", "OTOÑO")[2], Present);
        assert_eq!(eval("NIÑOS", "OTOÑO")[0], Absent);
    }

    #[test]
    fn guess_row_reports_solved()
    {
        assert!(GuessRow::score("MUNDO", "MUNDO").is_solved());
        assert!(!GuessRow::score("MENTE", "MUNDO").is_solved());
        assert_eq!(GuessRow::score("MENTE", "MUNDO").word(), "MENTE");
    }

    #[test]
    fn keyboard_never_downgrades()
    {
        let mut keyboard = KeyboardState::default();
        keyboard.upgrade('A', Correct);
        keyboard.upgrade('A', Present);
        keyboard.upgrade('A', Absent);
        assert_eq!(keyboard.get('A'), Some(Correct));

        keyboard.upgrade('B', Present);
        keyboard.upgrade('B', Absent);
        assert_eq!(keyboard.get('B'), Some(Present));

        keyboard.upgrade('C', Absent);
        keyboard.upgrade('C', Correct);
        assert_eq!(keyboard.get('C'), Some(Correct));
        assert_eq!(keyboard.get('D'), None);
    }

    #[test]
    fn keyboard_applies_rows()
    {
        let mut keyboard = KeyboardState::default();
        keyboard.apply(&GuessRow::score("PLAZA", "PLAYA"));
        keyboard.apply(&GuessRow::score("SALSA", "PLAYA"));
        assert_eq!(keyboard.get('A'), Some(Correct));
        assert_eq!(keyboard.get('Z'), Some(Absent));
        assert_eq!(keyboard.get('S'), Some(Absent));
        assert_eq!(keyboard.get('L'), Some(Correct));
    }
}
