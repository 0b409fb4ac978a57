//! Collation for sidebar ordering.
//!
//! Names are compared on a transliterated, case-folded key so that
//! accented and CJK names sort by their Latin reading (`Ärger` near
//! `Arger`, `中文` as `Zhong Wen`). Digit runs compare by value, so
//! `2-setup` sorts before `10-deploy`. Ties fall back to the raw strings
//! to keep the order total.

use deunicode::deunicode;
use std::cmp::Ordering;

fn collation_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Natural order: digit runs compare numerically.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let (ka, kb) = (collation_key(a), collation_key(b));
    natural_cmp(&ka, &kb).then_with(|| a.cmp(b))
}

/// Plain collation order, no numeric runs.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = Chunks(a);
    let mut b = Chunks(b);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (is_digits(x), is_digits(y)) {
                    (true, true) => compare_digits(x, y),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

/// Compare digit runs by value without overflow.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        // `01` after `1`
        .then_with(|| a.len().cmp(&b.len()))
}

/// Splits a string into alternating digit and non-digit runs.
struct Chunks<'a>(&'a str);

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.0.bytes().next()?;
        let digit = first.is_ascii_digit();
        let end = self
            .0
            .bytes()
            .position(|b| b.is_ascii_digit() != digit)
            .unwrap_or(self.0.len());
        let (chunk, rest) = self.0.split_at(end);
        self.0 = rest;
        Some(chunk)
    }
}
