//! `{ each: true }` rewriting of decorator argument lists
//!
//! class-validator applies a decorator to every element of an array only when
//! its validation options carry `each: true`. The options object is always the
//! last argument, so the rewrite works on the argument text: it either appends
//! a new `{ each: true }` argument or splices `each: true` into a trailing
//! object literal the user already wrote.
//!
//! Object literal detection is shallow. Only the first brace-delimited block on
//! a line is treated as one argument when counting, and only a final `}` is
//! spliced into; nested or repeated literals are not parsed.

use std::borrow::Cow;

use super::validator_catalog::default_params;

const EACH_ARG: &str = "{ each: true }";

/// Rewrite the argument list of decorator `name` so it applies to each element.
///
/// `value` is the current argument text (`None` or empty for no arguments).
pub fn wrap_each(name: &str, value: Option<&str>) -> String {
    let defaults = default_params(name);

    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return match defaults {
            Some(defaults) => format!("{defaults}, {EACH_ARG}"),
            None => EACH_ARG.to_string(),
        };
    };

    if value.contains("each:") {
        return value.to_string();
    }

    if let Some(defaults) = defaults {
        let default_args = split_args(defaults);
        let supplied = split_args(&collapse_object_literal(value)).len();

        if supplied > default_args.len() {
            if let Some(spliced) = splice_into_trailing_object(value) {
                return spliced;
            }
        }

        let unused = default_args.get(supplied..).unwrap_or_default();
        if unused.is_empty() {
            return format!("{value}, {EACH_ARG}");
        }
        return format!("{value}, {}, {EACH_ARG}", unused.join(", "));
    }

    splice_into_trailing_object(value).unwrap_or_else(|| format!("{value}, {EACH_ARG}"))
}

/// Split on `,` followed by optional whitespace
fn split_args(args: &str) -> Vec<&str> {
    args.split(',')
        .enumerate()
        .map(|(i, arg)| if i == 0 { arg } else { arg.trim_start() })
        .collect()
}

/// Replace the first `{ ... }` block on a single line with a placeholder
fn collapse_object_literal(value: &str) -> Cow<'_, str> {
    for (start, _) in value.match_indices('{') {
        let line_end = value[start..]
            .find('\n')
            .map_or(value.len(), |offset| start + offset);
        if let Some(offset) = value[start + 1..line_end].rfind('}') {
            let end = start + 1 + offset;
            return Cow::Owned(format!("{}_{}", &value[..start], &value[end + 1..]));
        }
    }
    Cow::Borrowed(value)
}

/// Turn a trailing `}` (plus trailing whitespace) into `, each: true }`
fn splice_into_trailing_object(value: &str) -> Option<String> {
    let trimmed = value.trim_end();
    trimmed
        .strip_suffix('}')
        .map(|head| format!("{head}, each: true }}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_value() {
        assert_eq!(wrap_each("IsInt", None), "{ each: true }");
        assert_eq!(wrap_each("IsInt", Some("")), "{ each: true }");
        assert_eq!(wrap_each("Min", None), "0, { each: true }");
        assert_eq!(wrap_each("Matches", None), "'', '', { each: true }");
        // empty default literal counts as no default
        assert_eq!(wrap_each("IsInstance", None), "{ each: true }");
    }

    #[test]
    fn test_bare_scalar_value() {
        assert_eq!(wrap_each("Min", Some("5")), "5, { each: true }");
        assert_eq!(wrap_each("IsInstance", Some("Foo")), "Foo, { each: true }");
        assert_eq!(wrap_each("IsEnum", Some("Role")), "Role, { each: true }");
    }

    #[test]
    fn test_fills_missing_default_args() {
        assert_eq!(wrap_each("IsByteLength", Some("2")), "2, 4, { each: true }");
        assert_eq!(wrap_each("Length", Some("3")), "3, 10, { each: true }");
    }

    #[test]
    fn test_multiple_scalar_values() {
        assert_eq!(wrap_each("Length", Some("2, 20")), "2, 20, { each: true }");
        assert_eq!(wrap_each("Min", Some("5,6")), "5,6, { each: true }");
    }

    #[test]
    fn test_trailing_object_literal_with_extra_args() {
        assert_eq!(
            wrap_each("Length", Some("2, 20, { message: 'bad' }")),
            "2, 20, { message: 'bad' , each: true }"
        );
        assert_eq!(
            wrap_each("Min", Some("1, { message: 'too small' }  ")),
            "1, { message: 'too small' , each: true }"
        );
    }

    #[test]
    fn test_object_literal_filling_a_default_slot() {
        // `{}` is the options argument of IsNumber, so validation options are appended
        assert_eq!(
            wrap_each("IsNumber", Some("{ allowNaN: true }")),
            "{ allowNaN: true }, { each: true }"
        );
    }

    #[test]
    fn test_no_defaults_trailing_object_literal() {
        assert_eq!(
            wrap_each("IsString", Some("{ message: 'x' }")),
            "{ message: 'x' , each: true }"
        );
        assert_eq!(
            wrap_each("ValidateNested", Some("{message:'x'}\n")),
            "{message:'x', each: true }"
        );
    }

    #[test]
    fn test_no_defaults_plain_value() {
        assert_eq!(wrap_each("IsString", Some("'x'")), "'x', { each: true }");
    }

    #[test]
    fn test_already_wrapped() {
        assert_eq!(wrap_each("IsString", Some("{ each: false }")), "{ each: false }");
        assert_eq!(
            wrap_each("Min", Some("3, { each: true }")),
            "3, { each: true }"
        );
    }

    #[test]
    fn test_idempotent() {
        for (name, value) in [
            ("IsInt", None),
            ("Min", Some("5")),
            ("Length", Some("2, 20, { message: 'bad' }")),
            ("IsString", Some("{ message: 'x' }")),
            ("IsByteLength", Some("2")),
        ] {
            let once = wrap_each(name, value);
            assert_eq!(wrap_each(name, Some(once.as_str())), once);
        }
    }

    #[test]
    fn test_shallow_object_literal_match() {
        // two literals on one line collapse into a single counted argument
        assert_eq!(
            wrap_each("IsNumber", Some("{ allowNaN: true }, { message: 'x' }")),
            "{ allowNaN: true }, { message: 'x' }, { each: true }"
        );
    }

    #[test]
    fn test_split_args() {
        assert_eq!(split_args("1, 4"), vec!["1", "4"]);
        assert_eq!(split_args("'',''"), vec!["''", "''"]);
        assert_eq!(split_args(""), vec![""]);
    }

    #[test]
    fn test_collapse_object_literal() {
        assert_eq!(collapse_object_literal("1, { a: 1 }"), "1, _");
        assert_eq!(collapse_object_literal("{ a }, { b }"), "_");
        assert_eq!(collapse_object_literal("{\n}"), "{\n}");
        assert_eq!(collapse_object_literal("5"), "5");
    }
}
