use std::collections::HashMap;
use std::fmt;

/**
 * A Greek letter used as a Bayer code, with the
 * three-letter abbreviation used by star catalogues
 **/
pub struct GreekLetter {
    pub letter: char,
    pub short_name: &'static str,
}

pub static GREEK_LETTERS: [GreekLetter; 23] = [
    GreekLetter { letter: 'α', short_name: "alp" },
    GreekLetter { letter: 'β', short_name: "bet" },
    GreekLetter { letter: 'γ', short_name: "gam" },
    GreekLetter { letter: 'δ', short_name: "del" },
    GreekLetter { letter: 'ε', short_name: "eps" },
    GreekLetter { letter: 'ζ', short_name: "zet" },
    GreekLetter { letter: 'η', short_name: "eta" },
    GreekLetter { letter: 'θ', short_name: "the" },
    GreekLetter { letter: 'ι', short_name: "iot" },
    GreekLetter { letter: 'κ', short_name: "kap" },
    GreekLetter { letter: 'λ', short_name: "lam" },
    GreekLetter { letter: 'μ', short_name: "mu" },
    GreekLetter { letter: 'ν', short_name: "nu" },
    GreekLetter { letter: 'ξ', short_name: "xi" },
    GreekLetter { letter: 'π', short_name: "pi" },
    GreekLetter { letter: 'ρ', short_name: "rho" },
    GreekLetter { letter: 'σ', short_name: "sig" },
    GreekLetter { letter: 'τ', short_name: "tau" },
    GreekLetter { letter: 'υ', short_name: "ups" },
    GreekLetter { letter: 'φ', short_name: "phi" },
    GreekLetter { letter: 'χ', short_name: "chi" },
    GreekLetter { letter: 'ψ', short_name: "psi" },
    // omega goes by "omi" in the catalogues we read
    GreekLetter { letter: 'ω', short_name: "omi" },
];

lazy_static! {
    static ref BY_SHORT_NAME: HashMap<&'static str, char> = GREEK_LETTERS
        .iter()
        .map(|g| (g.short_name, g.letter))
        .collect();
    static ref BY_LETTER: HashMap<char, &'static str> = GREEK_LETTERS
        .iter()
        .map(|g| (g.letter, g.short_name))
        .collect();
}

/**
 * Greek letter for a three-letter abbreviation, ignoring case
 **/
pub fn bayer_from_short_name(code: &str) -> Option<char> {
    BY_SHORT_NAME.get(code.to_lowercase().as_str()).copied()
}

/**
 * Abbreviation of a Greek letter, if it is one
 **/
pub fn short_name(letter: char) -> Option<&'static str> {
    BY_LETTER.get(&letter).copied()
}

/**
 * In-constellation identifier of a star. At most one of
 * the Bayer, Flamsteed and variable-star codes is set.
 * Indices are 1-based.
 **/
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Designation {
    pub bayer: Option<char>,
    pub flamsteed: Option<u32>,
    pub variable_star: Option<String>,
    pub in_system_index: Option<u32>,
    pub constellation: String,
}

/**
 * The part of a designation that identifies a star
 * across catalogues
 **/
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DesignationKey {
    Bayer(char, String),
    Flamsteed(u32, String),
}

impl Designation {
    pub fn from_code(code: &str, constellation: &str) -> Self {
        let mut d = Designation {
            constellation: constellation.to_string(),
            ..Default::default()
        };
        d.classify(code);
        d
    }

    /**
     * Sets the code from its compact form. Checked in order:
     * Greek letter (or its abbreviation), variable star (first
     * char not a digit) and Flamsteed number. A number that
     * does not parse leaves no code set. Empty input does
     * nothing.
     **/
    pub fn classify(&mut self, code: &str) {
        let mut chars = code.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return,
        };
        self.bayer = None;
        self.flamsteed = None;
        self.variable_star = None;

        if chars.next().is_none() && short_name(first).is_some() {
            self.bayer = Some(first);
            return;
        }
        if let Some(letter) = bayer_from_short_name(code) {
            self.bayer = Some(letter);
            return;
        }
        if !first.is_ascii_digit() {
            self.variable_star = Some(code.to_string());
            return;
        }
        match code.parse::<u32>() {
            Ok(n) if n > 0 => self.flamsteed = Some(n),
            _ => log::debug!("Ignoring malformed Flamsteed code '{}'", code),
        }
    }

    /**
     * Compact code, the inverse of classify
     **/
    pub fn code(&self) -> String {
        if let Some(letter) = self.bayer {
            letter.to_string()
        } else if let Some(n) = self.flamsteed {
            n.to_string()
        } else if let Some(v) = &self.variable_star {
            v.clone()
        } else {
            String::new()
        }
    }

    /**
     * Join key: Bayer when present, else Flamsteed
     **/
    pub fn key(&self) -> Option<DesignationKey> {
        if let Some(letter) = self.bayer {
            Some(DesignationKey::Bayer(letter, self.constellation.clone()))
        } else {
            self.flamsteed
                .map(|n| DesignationKey::Flamsteed(n, self.constellation.clone()))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bayer.is_none() && self.flamsteed.is_none() && self.variable_star.is_none()
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())?;
        if let Some(i) = self.in_system_index {
            write!(f, "{}", i)?;
        }
        if !self.constellation.is_empty() {
            write!(f, " {}", self.constellation)?;
        }
        Ok(())
    }
}
