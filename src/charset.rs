//! Character set building for password generation.

use crate::config::GenerationConfig;

/// A character class, in the order classes are concatenated into a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    fn is_selected(self, config: &GenerationConfig) -> bool {
        match self {
            CharClass::Uppercase => config.include_uppercase,
            CharClass::Lowercase => config.include_lowercase,
            CharClass::Numbers => config.include_numbers,
            CharClass::Symbols => config.include_symbols,
        }
    }

    /// Each class consults only its own exclusion flag.
    fn is_excluding(self, config: &GenerationConfig) -> bool {
        match self {
            CharClass::Symbols => config.exclude_ambiguous,
            _ => config.exclude_similar,
        }
    }

    /// Returns the alphabet for this class, with or without its exclusions applied.
    pub fn alphabet(self, excluding: bool) -> &'static str {
        let entry = &TABLE[self as usize];
        debug_assert_eq!(entry.class, self);
        if excluding { entry.excluded } else { entry.full }
    }
}

struct ClassTable {
    class: CharClass,
    full: &'static str,
    /// Letters and digits drop similar glyphs, symbols drop ambiguous ones.
    excluded: &'static str,
}

const TABLE: [ClassTable; 4] = [
    ClassTable {
        class: CharClass::Uppercase,
        full: "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        excluded: "ABCDEFGHJKLMNPQRSTUVWXYZ",
    },
    ClassTable {
        class: CharClass::Lowercase,
        full: "abcdefghijklmnopqrstuvwxyz",
        excluded: "abcdefghijkmnopqrstuvwxyz",
    },
    ClassTable {
        class: CharClass::Numbers,
        full: "0123456789",
        excluded: "23456789",
    },
    ClassTable {
        class: CharClass::Symbols,
        full: "!@#$%^&*()_+-=[]{}|;:,.<>?/~`",
        excluded: "!@#$%^&*()_+-=;:,.?",
    },
];

/// The pool of characters a password is sampled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Concatenates the selected class alphabets in fixed order.
    pub fn from_config(config: &GenerationConfig) -> Self {
        let chars = CharClass::ALL
            .into_iter()
            .filter(|class| class.is_selected(config))
            .flat_map(|class| class.alphabet(class.is_excluding(config)).chars())
            .collect();
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}
