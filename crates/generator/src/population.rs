use crate::loads::{ALPHABET_LEN, LetterLoads};
use chrono::NaiveDate;
use core_types::{Gender, Person};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Name components are 1 to 10 lowercase letters, capitalized.
const MIN_NAME_LEN: usize = 1;
const MAX_NAME_LEN: usize = 10;

/// Birth years are drawn uniformly from this inclusive range.
const BIRTH_YEAR_MIN: i32 = 1990;
const BIRTH_YEAR_MAX: i32 = 2000;

/// Finite stream of synthetic person records with balanced surname initials.
///
/// Each surname initial is picked uniformly among the letters currently at
/// minimum load, which keeps the load spread at most 1 after every record.
/// The load table is mutated in place, so a run yields exactly the requested
/// count and is not restartable.
pub struct BalancedGenerator<R: Rng> {
    rng: R,
    loads: LetterLoads,
    index: usize,
    count: usize,
}

impl BalancedGenerator<ThreadRng> {
    /// Generator for `count` records, seeded from the thread RNG.
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, rand::rng())
    }
}

impl<R: Rng> BalancedGenerator<R> {
    /// Generator with a caller-supplied RNG, for deterministic runs.
    pub fn with_rng(count: usize, rng: R) -> Self {
        Self {
            rng,
            loads: LetterLoads::new(),
            index: 0,
            count,
        }
    }

    /// The load table accumulated so far in this run.
    pub fn loads(&self) -> &LetterLoads {
        &self.loads
    }

    /// Picks uniformly among the letters currently at minimum load and
    /// records the pick.
    fn pick_initial(&mut self) -> usize {
        let candidates = self.loads.at_minimum();
        let choice = candidates[self.rng.random_range(0..candidates.len())];
        self.loads.bump(choice);
        choice
    }

    fn random_letter(&mut self) -> char {
        (b'a' + self.rng.random_range(0..ALPHABET_LEN as u8)) as char
    }

    fn random_suffix(&mut self, len: usize) -> String {
        (0..len).map(|_| self.random_letter()).collect()
    }

    /// Surname: balanced initial plus a random suffix of 0 to 9 letters.
    fn surname(&mut self) -> String {
        let initial = (b'a' + self.pick_initial() as u8) as char;
        let suffix_len = self.rng.random_range(0..MAX_NAME_LEN);
        let suffix = self.random_suffix(suffix_len);
        capitalize(initial, &suffix)
    }

    /// First or middle name: fully random, no fairness constraint.
    fn given_name(&mut self) -> String {
        let len = self.rng.random_range(MIN_NAME_LEN..=MAX_NAME_LEN);
        let initial = self.random_letter();
        let rest = self.random_suffix(len - 1);
        capitalize(initial, &rest)
    }
}

fn capitalize(initial: char, rest: &str) -> String {
    let mut name = String::with_capacity(rest.len() + 1);
    name.push(initial.to_ascii_uppercase());
    name.push_str(rest);
    name
}

impl<R: Rng> Iterator for BalancedGenerator<R> {
    type Item = Person;

    fn next(&mut self) -> Option<Person> {
        if self.index >= self.count {
            return None;
        }

        let surname = self.surname();
        let first_name = self.given_name();
        let middle_name = self.given_name();
        let full_name = format!("{surname} {first_name} {middle_name}");

        // Strict alternation by record index, not random.
        let gender = if self.index % 2 == 0 {
            Gender::Male
        } else {
            Gender::Female
        };

        let year = self.rng.random_range(BIRTH_YEAR_MIN..=BIRTH_YEAR_MAX);
        let birth_date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();

        self.index += 1;
        Some(Person::new(full_name, birth_date, gender))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for BalancedGenerator<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn run(count: usize, seed: u64) -> (Vec<Person>, LetterLoads) {
        let mut generator = BalancedGenerator::with_rng(count, SmallRng::seed_from_u64(seed));
        let people: Vec<Person> = generator.by_ref().collect();
        (people, generator.loads().clone())
    }

    #[test]
    fn yields_exactly_the_requested_count() {
        for &count in &[0, 1, 25, 26, 27, 100, 999] {
            let (people, loads) = run(count, 7);
            assert_eq!(people.len(), count);
            assert_eq!(loads.total() as usize, count);
        }
    }

    #[test]
    fn initial_spread_never_exceeds_one() {
        for &count in &[1, 13, 26, 52, 77, 1000] {
            let (_, loads) = run(count, 42);
            assert!(
                loads.spread() <= 1,
                "spread {} after {} records",
                loads.spread(),
                count
            );
        }
    }

    #[test]
    fn spread_holds_after_every_step() {
        let mut generator = BalancedGenerator::with_rng(200, SmallRng::seed_from_u64(3));
        while generator.next().is_some() {
            assert!(generator.loads().spread() <= 1);
        }
    }

    #[test]
    fn gender_alternates_by_index() {
        let (people, _) = run(50, 11);
        for (i, person) in people.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            };
            assert_eq!(person.gender_id(), expected.id(), "record {}", i);
        }
    }

    #[test]
    fn full_names_are_three_capitalized_components() {
        let (people, _) = run(100, 23);
        for person in &people {
            let components: Vec<&str> = person.full_name().split(' ').collect();
            assert_eq!(components.len(), 3, "name {:?}", person.full_name());
            for component in components {
                assert!((1..=MAX_NAME_LEN).contains(&component.len()));
                let mut chars = component.chars();
                assert!(chars.next().unwrap().is_ascii_uppercase());
                assert!(chars.all(|c| c.is_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn birth_dates_are_january_first_within_range() {
        let (people, _) = run(100, 5);
        for person in &people {
            let date = person.birth_date();
            assert_eq!(date.month(), 1);
            assert_eq!(date.day(), 1);
            assert!((BIRTH_YEAR_MIN..=BIRTH_YEAR_MAX).contains(&date.year()));
        }
    }

    #[test]
    fn exhausted_generator_stays_empty() {
        let mut generator = BalancedGenerator::with_rng(3, SmallRng::seed_from_u64(1));
        assert_eq!(generator.by_ref().count(), 3);
        assert!(generator.next().is_none());
        assert_eq!(generator.len(), 0);
    }
}
