const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    Pair(&'a str, &'a str),
    Malformed,
}

/// Splits a word list into raw lines. A trailing newline does not start
/// another line.
pub(crate) fn lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);

    (!bytes.is_empty())
        .then(|| bytes.split(|b| *b == b'\n'))
        .into_iter()
        .flatten()
}

/// Parses `<surface><delimiter><base>`. With no delimiter configured, any
/// run of whitespace separates the two fields.
pub(crate) fn parse_line(raw: &[u8], delimiter: Option<char>) -> Line<'_> {
    let line = match std::str::from_utf8(raw) {
        Ok(v) => v.trim(),
        Err(_) => return Line::Malformed,
    };

    if line.is_empty() {
        return Line::Blank;
    }

    let fields = match delimiter {
        None => {
            let mut it = line.split_whitespace();
            (it.next(), it.next(), it.next())
        }
        Some(c) => {
            let mut it = line.split(c).map(str::trim);
            (it.next(), it.next(), it.next())
        }
    };

    match fields {
        (Some(surface), Some(base), None) if !surface.is_empty() && !base.is_empty() => {
            Line::Pair(surface, base)
        }
        _ => Line::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_delimited() {
        assert_eq!(
            parse_line(b"Autos\tAuto", None),
            Line::Pair("Autos", "Auto")
        );
        assert_eq!(
            parse_line(b"  gekostet    kosten \r", None),
            Line::Pair("gekostet", "kosten")
        );
        assert_eq!(parse_line(b"   ", None), Line::Blank);
        assert_eq!(parse_line(b"Autos", None), Line::Malformed);
        assert_eq!(parse_line(b"Autos Auto Wagen", None), Line::Malformed);
    }

    #[test]
    fn explicit_delimiter() {
        assert_eq!(
            parse_line(b"hat;haben", Some(';')),
            Line::Pair("hat", "haben")
        );
        assert_eq!(
            parse_line(b"hat ; haben", Some(';')),
            Line::Pair("hat", "haben")
        );
        assert_eq!(parse_line(b"hat;", Some(';')), Line::Malformed);
        assert_eq!(parse_line(b";haben", Some(';')), Line::Malformed);
        assert_eq!(parse_line(b"a;b;c", Some(';')), Line::Malformed);
        assert_eq!(parse_line(b"hat haben", Some(';')), Line::Malformed);
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        assert_eq!(parse_line(b"\xD6kosteuer\tx", None), Line::Malformed);
    }

    #[test]
    fn splits_lines() {
        let input = "\u{feff}a b\n\nc d\n";
        let out: Vec<&[u8]> = lines(input.as_bytes()).collect();
        assert_eq!(out, vec![&b"a b"[..], &b""[..], &b"c d"[..]]);

        assert_eq!(lines(b"").count(), 0);
        assert_eq!(lines(b"\n").count(), 0);
        assert_eq!(lines(b"x y").count(), 1);
    }
}
