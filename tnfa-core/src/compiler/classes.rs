use alloc::string::String;
use core::ops::RangeInclusive;

use super::{
    ClassDefect,
    ConversionError,
};

/// Parse the body of a bracket class. Only a single `<start>-<end>` range is supported.
fn parse_class_body(body: &str) -> Result<RangeInclusive<char>, ClassDefect> {
    let mut chars = body.chars();
    let (Some(start), Some('-'), Some(end), None) =
        (chars.next(), chars.next(), chars.next(), chars.next())
    else {
        return Err(ClassDefect::NotARange);
    };

    if start > end {
        return Err(ClassDefect::ReversedRange);
    }

    Ok(start..=end)
}

fn write_alternation(output: &mut String, range: RangeInclusive<char>) {
    output.push('(');
    for (index, value) in range.enumerate() {
        if index > 0 {
            output.push('|');
        }
        output.push(value);
    }
    output.push(')');
}

/// Rewrite every character class like `[a-z]` into the alternation `(a|b|...|z)`.
///
/// Characters outside of brackets are copied unchanged. The members of a range are
/// emitted verbatim in ascending order.
pub fn expand_character_classes(pattern: &str) -> Result<String, ConversionError> {
    let mut expanded = String::with_capacity(pattern.len());
    let mut cursor = 0;
    while cursor < pattern.len() {
        let Some(open) = pattern[cursor..].find('[') else {
            expanded.push_str(&pattern[cursor..]);
            break;
        };

        let open = cursor + open;
        expanded.push_str(&pattern[cursor..open]);

        let Some(close) = pattern[open + 1..].find(']') else {
            return Err(ConversionError::class(
                open..pattern.len(),
                ClassDefect::Unterminated,
            ));
        };

        let close = open + 1 + close;
        let range = parse_class_body(&pattern[open + 1..close])
            .map_err(|defect| ConversionError::class(open..close + 1, defect))?;

        write_alternation(&mut expanded, range);
        cursor = close + 1;
    }

    Ok(expanded)
}

#[cfg(test)]
mod test {
    use super::expand_character_classes;
    use crate::compiler::{
        ClassDefect,
        ConversionError,
    };

    #[test]
    fn test_expand() {
        assert_eq!(expand_character_classes("[a-c]").unwrap(), "(a|b|c)");
        assert_eq!(expand_character_classes("x[0-2]y").unwrap(), "x(0|1|2)y");
        assert_eq!(
            expand_character_classes("[a-b]*[x-y]").unwrap(),
            "(a|b)*(x|y)"
        );

        /* single member range */
        assert_eq!(expand_character_classes("[q-q]").unwrap(), "(q)");

        /* no classes at all */
        assert_eq!(expand_character_classes("(ab)|c*").unwrap(), "(ab)|c*");
        assert_eq!(expand_character_classes("").unwrap(), "");

        /* a closing bracket on its own is an ordinary character */
        assert_eq!(expand_character_classes("a]").unwrap(), "a]");

        /* the dash itself may be a bound */
        assert_eq!(expand_character_classes("[--.]").unwrap(), "(-|.)");
    }

    #[test]
    fn test_expand_unicode() {
        assert_eq!(expand_character_classes("[α-γ]").unwrap(), "(α|β|γ)");
        assert_eq!(expand_character_classes("ä[a-b]").unwrap(), "ä(a|b)");
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            expand_character_classes("[a-z").unwrap_err(),
            ConversionError::class(0..4, ClassDefect::Unterminated)
        );
        assert_eq!(
            expand_character_classes("ab[").unwrap_err(),
            ConversionError::class(2..3, ClassDefect::Unterminated)
        );
    }

    #[test]
    fn test_not_a_range() {
        for (pattern, position) in [
            ("[abc]", 0..5),
            ("[^a-z]", 0..6),
            ("[a-]", 0..4),
            ("[]", 0..2),
            ("[a-bc]", 0..6),
            ("[a_b]", 0..5),
            ("x[-ab]", 1..6),
        ] {
            assert_eq!(
                expand_character_classes(pattern).unwrap_err(),
                ConversionError::class(position, ClassDefect::NotARange),
                "pattern {}",
                pattern
            );
        }
    }

    #[test]
    fn test_reversed_range() {
        assert_eq!(
            expand_character_classes("[z-a]").unwrap_err(),
            ConversionError::class(0..5, ClassDefect::ReversedRange)
        );
    }
}
