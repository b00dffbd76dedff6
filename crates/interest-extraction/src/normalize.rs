/// Collapse runs of three or more identical letters into a single letter.
///
/// "sooo" → "so", "goooal" → "goal". Doubled letters ("cool") are untouched,
/// as are repeated digits and punctuation.
pub fn collapse_elongation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        if c.is_alphabetic() && run >= 3 {
            out.push(c);
        } else {
            out.extend(std::iter::repeat(c).take(run));
        }
        i += run;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_long_runs() {
        assert_eq!(collapse_elongation("sooo"), "so");
        assert_eq!(collapse_elongation("goooal!!!"), "goal!!!");
    }

    #[test]
    fn keeps_doubled_letters() {
        assert_eq!(collapse_elongation("cool football"), "cool football");
    }

    #[test]
    fn keeps_digit_runs() {
        assert_eq!(collapse_elongation("1000 times"), "1000 times");
    }
}
