use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compares two strings the way a person would order them: runs of ASCII digits are compared by
/// their numeric value, everything else character by character.
///
/// This is the natural ordering used by `sort` when no comparator is supplied, applied to each
/// value's [`Display`](std::fmt::Display) representation.
///
/// Digit runs of equal value are tie-broken by their length, so `"1"` sorts before `"01"`.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use typed_collections::compare::natural_cmp;
/// assert_eq!(natural_cmp("img9.png", "img10.png"), Ordering::Less);
/// assert_eq!(natural_cmp("10", "9"), Ordering::Greater);
/// assert_eq!(natural_cmp("abc", "abd"), Ordering::Less);
/// ```
pub fn natural_cmp(lhs: &str, rhs: &str) -> Ordering {
    let mut lhs = lhs.chars().peekable();
    let mut rhs = rhs.chars().peekable();

    loop {
        match (lhs.peek().copied(), rhs.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut lhs);
                let r_run = take_digits(&mut rhs);
                match cmp_digit_runs(&l_run, &r_run) {
                    Ordering::Equal => continue,
                    non_eq => return non_eq,
                }
            },
            (Some(l), Some(r)) => match l.cmp(&r) {
                Ordering::Equal => {
                    lhs.next();
                    rhs.next();
                },
                non_eq => return non_eq,
            },
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn cmp_digit_runs(lhs: &str, rhs: &str) -> Ordering {
    let l_trimmed = lhs.trim_start_matches('0');
    let r_trimmed = rhs.trim_start_matches('0');

    // Without leading zeros, a longer run is always the larger number.
    l_trimmed.len().cmp(&r_trimmed.len())
        .then_with(|| l_trimmed.cmp(r_trimmed))
        .then_with(|| lhs.len().cmp(&rhs.len()))
}
