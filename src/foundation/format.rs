use crate::foundation::error::{RaysceneError, RaysceneResult};

/// Format a finite number as a renderer literal.
///
/// `None` uses the shortest decimal that round-trips; `Some(n)` mimics C's `%.{n}g`.
/// Negative zero always prints as `0`.
pub(crate) fn number(v: f64, precision: Option<u8>) -> String {
    let s = match precision {
        None => format!("{v}"),
        Some(digits) => significant(v, usize::from(digits.max(1))),
    };
    if s == "-0" { "0".to_string() } else { s }
}

fn significant(v: f64, digits: usize) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{:.*e}", digits - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 {
        let mantissa = trim_fraction(mantissa);
        return format!("{mantissa}e{exp}");
    }

    let decimals = (digits as i32 - 1 - exp).max(0) as usize;
    trim_fraction(&format!("{v:.decimals$}")).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Quote a string literal, escaping backslashes and double quotes.
///
/// Control characters cannot appear in a renderer string literal and are rejected.
pub(crate) fn quoted(s: &str) -> RaysceneResult<String> {
    if let Some(c) = s.chars().find(|c| c.is_control()) {
        return Err(RaysceneError::value(format!(
            "string literal contains control character {c:?}"
        )));
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    Ok(out)
}

/// Validate a bare renderer identifier (`Yellow`, `T_Stone1`, ...).
pub(crate) fn identifier(s: &str) -> RaysceneResult<&str> {
    let mut chars = s.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid {
        return Err(RaysceneError::value(format!("'{s}' is not a valid identifier")));
    }
    Ok(s)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/format.rs"]
mod tests;
