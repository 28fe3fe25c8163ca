//! Compact text notation for patterns.
//!
//! A sequence is written as whitespace-separated elements:
//!
//! | element          | meaning                                       |
//! |------------------|-----------------------------------------------|
//! | `*`              | exactly one token                             |
//! | `**`             | zero or more tokens                           |
//! | `_`              | zero-width placeholder                        |
//! | `a&b`            | token satisfying both `a` and `b`             |
//! | `a/b`            | token satisfying `a` or `b` (`*` is allowed)  |
//! | trailing `?`     | the element may be skipped                    |
//!
//! An atom may name its field with `pos:`, `detail:`, `type:`, `form:` or
//! `value:`. Without a prefix it is read as a part of speech, an inflection
//! form, a detail or an inflection type, in that order, and as a literal
//! value if it is none of those. Several realizations of one rule are
//! separated by `|`.
//!
//! A backslash makes the next character literal, so values may contain
//! `/`, `&`, `|`, `?`, `*`, `_` or whitespace. [`escape_value`] adds the
//! backslashes, and `Display` on patterns uses it, so rendered notation
//! parses back to the same pattern.
//!
//! ```
//! use kotogram::grammar::notation::parse_sequence;
//!
//! let sequence = parse_sequence("名詞 の 間 に?").unwrap();
//! assert_eq!(sequence.len(), 4);
//! assert_eq!(sequence.to_string(), "pos:名詞 value:の value:間 value:に?");
//! ```

use crate::error::{KotogramError, Result};
use crate::grammar::pattern::{TokenConstraint, TokenPattern};
use crate::grammar::sequence::PatternSequence;
use crate::morph::tags::{InflectionForm, InflectionType, PartOfSpeech, PosDetail};

/// Parse one element.
pub fn parse_pattern(element: &str) -> Result<TokenPattern> {
    let element = element.trim();
    let (body, optional) = match element.strip_suffix('?') {
        Some(body) if !ends_with_escape(body) => (body, true),
        _ => (element, false),
    };

    let pattern = match body {
        "" => return Err(KotogramError::parse(format!("Empty pattern element '{element}'"))),
        "**" => return Ok(TokenPattern::star()),
        "_" => return Ok(TokenPattern::placeholder()),
        _ => {
            let mut branches = split_unescaped(body, |c| c == '/')
                .into_iter()
                .map(|branch| parse_branch(branch, element));
            let first = branches
                .next()
                .ok_or_else(|| KotogramError::parse(format!("Empty pattern element '{element}'")))??;
            branches.try_fold(first, |pattern, alt| alt.map(|alt| pattern.or(alt)))?
        }
    };

    Ok(if optional { pattern.optional() } else { pattern })
}

/// Parse whitespace-separated elements into a sequence.
pub fn parse_sequence(notation: &str) -> Result<PatternSequence> {
    let patterns = split_unescaped(notation, char::is_whitespace)
        .into_iter()
        .filter(|element| !element.is_empty())
        .map(parse_pattern)
        .collect::<Result<Vec<_>>>()?;
    PatternSequence::new(patterns)
}

/// Parse `|`-separated realizations.
pub fn parse_sequences(notation: &str) -> Result<Vec<PatternSequence>> {
    split_unescaped(notation, |c| c == '|')
        .into_iter()
        .map(parse_sequence)
        .collect()
}

/// Escape a literal value so that it parses back unchanged.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '/' | '&' | '|' | '?' | '*' | '_') || c.is_whitespace() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescaped.push(chars.next().unwrap_or('\\')),
            _ => unescaped.push(c),
        }
    }
    unescaped
}

// Odd number of trailing backslashes: the next character is escaped.
fn ends_with_escape(text: &str) -> bool {
    text.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split at every unescaped separator. Escapes are kept in the pieces.
fn split_unescaped(text: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if is_separator(c) {
            pieces.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    pieces.push(&text[start..]);
    pieces
}

fn parse_branch(branch: &str, element: &str) -> Result<TokenPattern> {
    if branch == "*" {
        return Ok(TokenPattern::any_token());
    }
    Ok(TokenPattern::classify(
        parse_constraint(branch, element)?,
        Vec::new(),
        false,
    ))
}

fn parse_constraint(branch: &str, element: &str) -> Result<TokenConstraint> {
    let mut constraint = TokenConstraint::default();
    for atom in split_unescaped(branch, |c| c == '&') {
        if atom.is_empty() {
            return Err(KotogramError::parse(format!(
                "Empty atom in pattern element '{element}'"
            )));
        }
        apply_atom(&mut constraint, atom, element)?;
    }
    Ok(constraint)
}

fn apply_atom(constraint: &mut TokenConstraint, atom: &str, element: &str) -> Result<()> {
    let duplicate = |field: &str| {
        KotogramError::parse(format!(
            "Field '{field}' is constrained twice in pattern element '{element}'"
        ))
    };

    if let Some((prefix, label)) = split_prefix(atom) {
        let label = unescape(label);
        match prefix {
            "pos" => return set(&mut constraint.part_of_speech, label.parse()?, || duplicate("pos")),
            "detail" => return set(&mut constraint.pos_detail, label.parse()?, || duplicate("detail")),
            "type" => return set(&mut constraint.inflection_type, label.parse()?, || duplicate("type")),
            "form" => return set(&mut constraint.inflection_form, label.parse()?, || duplicate("form")),
            "value" => return set(&mut constraint.value, label, || duplicate("value")),
            _ => {}
        }
    }

    let atom = unescape(atom);
    if let Some(pos) = PartOfSpeech::from_label(&atom) {
        set(&mut constraint.part_of_speech, pos, || duplicate("pos"))
    } else if let Some(form) = InflectionForm::from_label(&atom).filter(|f| !f.is_unset()) {
        set(&mut constraint.inflection_form, form, || duplicate("form"))
    } else if let Some(detail) = PosDetail::from_label(&atom).filter(|d| !d.is_unset()) {
        set(&mut constraint.pos_detail, detail, || duplicate("detail"))
    } else if let Some(infl_type) = InflectionType::from_label(&atom).filter(|t| !t.is_unset()) {
        set(&mut constraint.inflection_type, infl_type, || duplicate("type"))
    } else {
        set(&mut constraint.value, atom, || duplicate("value"))
    }
}

fn split_prefix(atom: &str) -> Option<(&str, &str)> {
    let colon = split_unescaped(atom, |c| c == ':').first()?.len();
    (colon < atom.len()).then(|| (&atom[..colon], &atom[colon + 1..]))
}

fn set<T>(slot: &mut Option<T>, value: T, duplicate: impl FnOnce() -> KotogramError) -> Result<()> {
    if slot.is_some() {
        return Err(duplicate());
    }
    *slot = Some(value);
    Ok(())
}
