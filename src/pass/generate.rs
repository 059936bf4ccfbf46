//! Password construction.

use std::fmt;

use log::debug;
use zeroize::Zeroize;

use super::charset;
use super::request::GenerationRequest;
use crate::entropy::Entropy;
use crate::error::{InvalidRequest, Result};

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Build a password honoring the request's length and classes.
///
/// One required character per enabled class is drawn first, in enumeration
/// order. When the length is shorter than the number of classes the
/// required list is cut from the end, so later classes are dropped.
pub fn build<E: Entropy>(request: &GenerationRequest, rng: &mut E) -> Result<Password> {
    let classes = request.classes();
    if classes.is_empty() {
        return Err(InvalidRequest::NoClassSelected.into());
    }
    let length = request.length();

    let mut chars: Vec<u8> = Vec::with_capacity(length.max(classes.len()));
    for class in classes.iter() {
        chars.push(rng.pick(class.alphabet()));
    }
    chars.truncate(length);

    let mut pool = charset::pool(classes);
    while chars.len() < length {
        chars.push(rng.pick(&pool));
    }
    pool.zeroize();

    shuffle(&mut chars, rng);

    debug!(
        "built password: length={} classes={}",
        chars.len(),
        classes.len()
    );

    let password = chars.iter().map(|&b| b as char).collect();
    chars.zeroize();
    Ok(Password(password))
}

/// Fisher-Yates.
#[inline]
fn shuffle<E: Entropy>(chars: &mut [u8], rng: &mut E) {
    for i in (1..chars.len()).rev() {
        let j = rng.below(i + 1);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharacterClass, ClassSet};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn classes(list: &[CharacterClass]) -> ClassSet {
        list.iter().copied().collect()
    }

    fn build_with(length: usize, set: ClassSet, seed: u64) -> Password {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let request = GenerationRequest::new(length, set).unwrap();
        build(&request, &mut rng).unwrap()
    }

    #[test]
    fn length_matches_request() {
        for length in 1..40 {
            let pass = build_with(length, ClassSet::all(), length as u64);
            assert_eq!(pass.len(), length);
        }
    }

    #[test]
    fn every_enabled_class_is_present() {
        for seed in 0..200 {
            let pass = build_with(4, ClassSet::all(), seed);
            for class in CharacterClass::ALL {
                assert!(
                    pass.as_str().chars().any(|c| class.contains(c)),
                    "seed {seed}: {class:?} missing"
                );
            }
        }
    }

    #[test]
    fn disabled_classes_never_appear() {
        let set = classes(&[CharacterClass::Lowercase, CharacterClass::Digit]);
        for seed in 0..50 {
            let pass = build_with(8, set, seed);
            assert_eq!(pass.len(), 8);
            assert!(
                pass.as_str()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            );
            assert!(pass.as_str().chars().any(|c| c.is_ascii_lowercase()));
            assert!(pass.as_str().chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn short_length_keeps_first_classes() {
        for seed in 0..100 {
            let pass = build_with(2, ClassSet::all(), seed);
            assert_eq!(pass.len(), 2);
            assert_eq!(pass.as_str().chars().filter(|c| c.is_ascii_lowercase()).count(), 1);
            assert_eq!(pass.as_str().chars().filter(|c| c.is_ascii_uppercase()).count(), 1);
        }
    }

    #[test]
    fn required_characters_are_not_front_loaded() {
        let set = classes(&[CharacterClass::Uppercase, CharacterClass::Digit]);
        let positions: std::collections::HashSet<usize> = (0..64)
            .filter_map(|seed| {
                build_with(2, set, seed)
                    .as_str()
                    .chars()
                    .position(|c| c.is_ascii_digit())
            })
            .collect();
        assert_eq!(positions.len(), 2);
    }

    #[test]
    fn same_seed_same_password() {
        assert_eq!(build_with(20, ClassSet::all(), 42), build_with(20, ClassSet::all(), 42));
    }

    #[test]
    fn debug_does_not_leak() {
        let pass = build_with(12, ClassSet::all(), 3);
        let shown = format!("{pass:?}");
        assert_eq!(shown, "Password(12 chars)");
    }
}
