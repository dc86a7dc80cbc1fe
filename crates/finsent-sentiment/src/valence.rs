//! Rule-based valence lexicon producing a normalized compound score.
//!
//! Word valences lie on a `[-4, 4]` scale. Per word, the raw valence is
//! adjusted for ALL-CAPS emphasis, nearby booster/dampener words and
//! negation in the three preceding tokens. Words before a contrastive "but"
//! are halved, words after it weighted 1.5x. The sum is amplified by `!` and
//! `?` and squashed into `[-1, 1]` with `s / sqrt(s² + 15)`.

use crate::models::CompoundModel;
use crate::text::{is_negation, tokenize, Token};

/// Normalization constant approximating the maximum expected raw sum.
const ALPHA: f64 = 15.0;
const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
/// Booster weight by distance (1, 2, 3 tokens back).
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("rally", 2.0),
    ("rallies", 2.0),
    ("rallied", 2.0),
    ("surge", 1.9),
    ("surges", 1.9),
    ("surged", 1.9),
    ("soar", 2.2),
    ("soars", 2.2),
    ("soared", 2.2),
    ("jump", 1.2),
    ("jumps", 1.2),
    ("gain", 2.0),
    ("gains", 1.8),
    ("rise", 1.1),
    ("rises", 1.1),
    ("climb", 1.0),
    ("climbs", 1.0),
    ("rebound", 1.6),
    ("rebounds", 1.6),
    ("recovery", 1.7),
    ("recover", 1.5),
    ("boom", 1.8),
    ("boost", 1.7),
    ("boosts", 1.7),
    ("growth", 1.6),
    ("grow", 1.4),
    ("profit", 1.9),
    ("profits", 1.9),
    ("win", 2.8),
    ("wins", 2.7),
    ("beat", 1.3),
    ("beats", 1.3),
    ("strong", 2.3),
    ("stronger", 2.1),
    ("good", 1.9),
    ("great", 3.1),
    ("best", 3.2),
    ("record", 1.0),
    ("optimism", 2.5),
    ("optimistic", 1.3),
    ("confident", 2.2),
    ("confidence", 2.3),
    ("bullish", 2.0),
    ("upgrade", 1.6),
    ("success", 2.7),
    ("successful", 2.8),
    ("improve", 1.9),
    ("improves", 1.8),
    ("improved", 2.1),
    ("positive", 2.6),
    ("benefit", 2.0),
    ("opportunity", 1.8),
    ("stable", 1.2),
    ("support", 1.7),
    ("agreement", 2.2),
    ("deal", 0.8),
    ("approve", 2.0),
    ("approved", 1.8),
    ("easing", 1.0),
    ("relief", 2.1),
    ("happy", 2.7),
    ("safe", 1.9),
    // Negative
    ("tumble", -1.8),
    ("tumbles", -1.8),
    ("tumbled", -1.8),
    ("plunge", -2.2),
    ("plunges", -2.2),
    ("plunged", -2.2),
    ("crash", -2.4),
    ("crashes", -2.4),
    ("slump", -1.9),
    ("slumps", -1.9),
    ("slide", -1.2),
    ("slides", -1.2),
    ("fall", -1.1),
    ("falls", -1.1),
    ("fell", -1.1),
    ("drop", -1.1),
    ("drops", -1.1),
    ("sink", -1.3),
    ("sinks", -1.3),
    ("decline", -1.5),
    ("declines", -1.5),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lose", -1.7),
    ("recession", -2.1),
    ("crisis", -3.1),
    ("fear", -2.2),
    ("fears", -1.9),
    ("worry", -1.9),
    ("worries", -1.9),
    ("concern", -1.2),
    ("concerns", -1.1),
    ("risk", -1.1),
    ("risks", -1.1),
    ("warning", -1.4),
    ("warns", -1.5),
    ("weak", -1.9),
    ("weaker", -1.9),
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("bearish", -2.0),
    ("downgrade", -1.6),
    ("layoffs", -2.0),
    ("cuts", -0.9),
    ("default", -1.9),
    ("bankruptcy", -2.7),
    ("fraud", -2.8),
    ("lawsuit", -0.9),
    ("probe", -0.8),
    ("scandal", -2.5),
    ("inflation", -0.8),
    ("volatile", -1.1),
    ("uncertainty", -1.4),
    ("turmoil", -2.3),
    ("selloff", -1.8),
    ("sell-off", -1.8),
    ("panic", -2.3),
    ("fail", -2.5),
    ("fails", -2.3),
    ("failed", -2.3),
    ("miss", -0.6),
    ("misses", -0.9),
    ("struggle", -1.5),
    ("struggles", -1.5),
    ("threat", -2.4),
    ("threatens", -2.0),
    ("war", -2.9),
    ("tariffs", -0.8),
    ("shutdown", -1.6),
];

/// Words that strengthen (positive value) or dampen (negative value) the
/// next sentiment-bearing word.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("hugely", BOOSTER_INCREMENT),
    ("sharply", BOOSTER_INCREMENT),
    ("significantly", BOOSTER_INCREMENT),
    ("substantially", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("more", BOOSTER_INCREMENT),
    ("slightly", -BOOSTER_INCREMENT),
    ("somewhat", -BOOSTER_INCREMENT),
    ("marginally", -BOOSTER_INCREMENT),
    ("modestly", -BOOSTER_INCREMENT),
    ("less", -BOOSTER_INCREMENT),
];

/// Default [`CompoundModel`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValenceLexicon;

impl ValenceLexicon {
    fn valence(word: &str) -> Option<f64> {
        LEXICON.iter().find(|&&(w, _)| w == word).map(|&(_, v)| v)
    }

    fn booster(word: &str) -> Option<f64> {
        BOOSTERS.iter().find(|&&(w, _)| w == word).map(|&(_, b)| b)
    }

    fn word_valence(tokens: &[Token<'_>], i: usize, caps_differential: bool) -> f64 {
        let token = &tokens[i];
        if Self::booster(&token.lower).is_some() {
            return 0.0;
        }
        let Some(mut valence) = Self::valence(&token.lower) else {
            return 0.0;
        };
        let sign = valence.signum();

        if caps_differential && is_all_caps(token.raw) {
            valence += CAPS_INCREMENT * sign;
        }

        for (distance, decay) in BOOSTER_DECAY.iter().enumerate().map(|(d, w)| (d + 1, *w)) {
            let Some(prev_index) = i.checked_sub(distance) else {
                break;
            };
            let prev = &tokens[prev_index];
            if let Some(boost) = Self::booster(&prev.lower) {
                let mut scalar = boost * sign;
                if caps_differential && is_all_caps(prev.raw) {
                    scalar += CAPS_INCREMENT * sign;
                }
                valence += scalar * decay;
            }
            if is_negation(&prev.lower) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }
}

impl CompoundModel for ValenceLexicon {
    fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let caps_differential = has_caps_differential(&tokens);

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| Self::word_valence(&tokens, i, caps_differential))
            .collect();

        if let Some(but_index) = tokens.iter().position(|t| t.lower == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < but_index {
                    *valence *= 0.5;
                } else if i > but_index {
                    *valence *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            sum += punctuation_emphasis(text) * sum.signum();
        }
        normalize(sum)
    }
}

fn is_all_caps(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}

/// True when some, but not all, words are written in ALL CAPS.
fn has_caps_differential(tokens: &[Token<'_>]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t.raw)).count();
    caps > 0 && caps < tokens.len()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();

    #[allow(clippy::cast_precision_loss)]
    let exclamation_boost = exclamations as f64 * 0.292;
    #[allow(clippy::cast_precision_loss)]
    let question_boost = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamation_boost + question_boost
}

fn normalize(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
