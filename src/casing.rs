/// Convert an identifier to lowercase kebab-case.
///
/// Four passes are applied in strict sequence, each feeding the next:
///
/// 1. every maximal run of whitespace becomes a single hyphen;
/// 2. a hyphen is inserted before any digit run that is immediately
///    followed by a letter, unless the run starts the string;
/// 3. a hyphen is inserted wherever a lowercase letter or digit is
///    immediately followed by an uppercase letter;
/// 4. the whole result is lowercased.
///
/// Consecutive uppercase letters are never split internally (pass 3 only
/// fires on the transition into uppercase), so `"XMLParser"` becomes
/// `"xmlparser"` while `"xmlParser"` becomes `"xml-parser"`.
pub fn to_kebab_case(identifier: &str) -> String {
    let collapsed = collapse_whitespace(identifier);
    let digits = hyphenate_digit_runs(&collapsed);
    let cased = hyphenate_case_boundaries(&digits);
    cased.to_lowercase()
}

/// Replace every maximal whitespace run with a single hyphen
fn collapse_whitespace(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_run = false;

    for c in input.chars() {
        if c.is_whitespace() {
            if !in_run {
                result.push('-');
                in_run = true;
            }
        } else {
            result.push(c);
            in_run = false;
        }
    }

    result
}

/// Prefix digit runs that are followed by a letter with a hyphen.
///
/// A run starting the string is left alone; pass 3 may still hyphenate
/// after it if the following letter is uppercase.
fn hyphenate_digit_runs(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let followed_by_letter = i < chars.len() && chars[i].is_alphabetic();
            if start > 0 && followed_by_letter {
                result.push('-');
            }
            result.extend(&chars[start..i]);
        } else {
            result.push(chars[i]);
            i += 1;
        }
    }

    result
}

/// Insert a hyphen at every lowercase/digit to uppercase boundary
fn hyphenate_case_boundaries(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if c.is_uppercase() {
            if let Some(p) = prev {
                if p.is_lowercase() || p.is_ascii_digit() {
                    result.push('-');
                }
            }
        }
        result.push(c);
        prev = Some(c);
    }

    result
}
