//! Classification of reply lines and field extraction from information text.

use heapless::{String, Vec};

use super::lines::LineBuffer;
use crate::error::{ErrorCode, ProtocolError, MAX_ERROR_TEXT};

/// Outcome of one command round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Ok,
    Error(Option<ErrorCode>),
    Timeout,
}

/// Where the information text of a reply is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Expect {
    /// Only a final result code is expected.
    Nothing,
    /// Line starting with the given prefix, e.g. `+CEREG:`. Should several
    /// precede the final result code, the last one is the solicited reply and
    /// the earlier ones are unsolicited pushes.
    Prefix(&'static str),
    /// First line without a `+` prefix that is neither a final result code
    /// nor a command echo, e.g. the socket id returned by `+NSOCR`.
    Bare,
}

pub fn is_ok(line: &str) -> bool {
    line == "OK"
}

/// `ERROR`, `ERROR: <code>` or `+CME ERROR: <code>`.
///
/// Returns `None` if the line is not an error, otherwise the (optional) code.
pub fn parse_error(line: &str) -> Option<Option<ErrorCode>> {
    let rest = line
        .strip_prefix("+CME ERROR")
        .or_else(|| line.strip_prefix("ERROR"))?;

    let code = rest.trim_start_matches(':').trim();
    if code.is_empty() {
        return Some(None);
    }

    Some(Some(match code.parse::<u16>() {
        Ok(n) => ErrorCode::Numeric(n),
        Err(_) => {
            let mut text = String::<MAX_ERROR_TEXT>::new();
            for c in code.chars() {
                if text.push(c).is_err() {
                    break;
                }
            }
            ErrorCode::Verbose(text)
        }
    }))
}

/// Final result codes end a reply.
pub fn is_final(line: &str) -> bool {
    is_ok(line) || parse_error(line).is_some()
}

/// Decide the outcome of a round-trip.
///
/// An error line anywhere wins over `OK`; lines that are neither are skipped.
pub fn classify<const N: usize, const L: usize>(lines: &LineBuffer<N, L>) -> Outcome {
    let mut ok = false;
    for line in lines.iter() {
        if let Some(code) = parse_error(line) {
            return Outcome::Error(code);
        }
        ok |= is_ok(line);
    }

    if ok {
        Outcome::Ok
    } else {
        Outcome::Timeout
    }
}

/// Pick the information text line out of a reply.
pub fn find_payload<const N: usize, const L: usize>(
    lines: &LineBuffer<N, L>,
    expect: Expect,
) -> Option<&str> {
    match expect {
        Expect::Nothing => None,
        Expect::Prefix(prefix) => lines
            .iter()
            .take_while(|l| !is_final(l))
            .filter(|l| l.starts_with(prefix))
            .last(),
        Expect::Bare => lines
            .iter()
            .find(|l| !is_final(l) && !l.starts_with('+') && !l.starts_with("AT")),
    }
}

/// Split `<prefix>: <v1>,<v2>,...` into its fields.
///
/// With `prefix` given, it is stripped together with the `:` and the spaces
/// that follow. Fields are separated by `,` outside of double quotes, the
/// quotes around a quoted field are removed. Empty fields are kept.
pub fn split_fields<'a, const N: usize>(
    line: &'a str,
    prefix: Option<&str>,
) -> Result<Vec<&'a str, N>, ProtocolError> {
    let values = match prefix {
        Some(prefix) => {
            let rest = line
                .strip_prefix(prefix)
                .ok_or(ProtocolError::MissingPayload)?;
            let rest = rest.strip_prefix(':').unwrap_or(rest);
            rest.trim_start_matches(' ')
        }
        None => line,
    };

    let mut fields = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (i, c) in values.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => {
                fields
                    .push(unquote(&values[start..i]))
                    .map_err(|_| ProtocolError::FieldCount)?;
                start = i + 1;
            }
            _ => {}
        }
    }
    fields
        .push(unquote(&values[start..]))
        .map_err(|_| ProtocolError::FieldCount)?;

    Ok(fields)
}

fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> LineBuffer<64, 5> {
        let mut buf = LineBuffer::new();
        for b in text.bytes() {
            buf.push(b);
        }
        buf
    }

    #[test]
    fn ok_without_error_is_success() {
        assert_eq!(classify(&lines("+CSQ: 31,99\r\nOK\r\n")), Outcome::Ok);
        assert_eq!(classify(&lines("OK\r\n")), Outcome::Ok);
    }

    #[test]
    fn cme_error_carries_its_code() {
        assert_eq!(
            classify(&lines("+CME ERROR: 8\r\n")),
            Outcome::Error(Some(ErrorCode::Numeric(8)))
        );
        assert_eq!(classify(&lines("ERROR\r\n")), Outcome::Error(None));
        assert_eq!(
            classify(&lines("+CME ERROR: operation not allowed\r\n")),
            Outcome::Error(Some(ErrorCode::Verbose(
                String::try_from("operation not allowed").unwrap()
            )))
        );
    }

    #[test]
    fn error_anywhere_wins_over_ok() {
        assert_eq!(
            classify(&lines("OK\r\n+CME ERROR: 4\r\n")),
            Outcome::Error(Some(ErrorCode::Numeric(4)))
        );
    }

    #[test]
    fn no_final_result_code_is_a_timeout() {
        assert_eq!(classify(&lines("")), Outcome::Timeout);
        assert_eq!(classify(&lines("+CEREG: 2,1\r\nNeul\r\n")), Outcome::Timeout);
    }

    #[test]
    fn noise_lines_are_skipped() {
        assert_eq!(classify(&lines("u-blox\r\nOKAY\r\nOK\r\n")), Outcome::Ok);
        assert!(!is_final("OKAY"));
        assert!(!is_final("NO CARRIER"));
    }

    #[test]
    fn finds_prefixed_payload() {
        let buf = lines("AT+CEREG?\r\n+CEREG: 2,1\r\nOK\r\n");
        assert_eq!(
            find_payload(&buf, Expect::Prefix("+CEREG:")),
            Some("+CEREG: 2,1")
        );
        assert_eq!(find_payload(&buf, Expect::Prefix("+CSQ:")), None);
        assert_eq!(find_payload(&buf, Expect::Nothing), None);
    }

    #[test]
    fn unsolicited_push_ahead_of_reply_is_not_the_payload() {
        let buf = lines("+CEREG: 1\r\n+CEREG: 2,1\r\nOK\r\n");
        assert_eq!(
            find_payload(&buf, Expect::Prefix("+CEREG:")),
            Some("+CEREG: 2,1")
        );

        // Nothing after the final result code belongs to the reply
        let buf = lines("+CEREG: 2,5\r\nOK\r\n+CEREG: 1\r\n");
        assert_eq!(
            find_payload(&buf, Expect::Prefix("+CEREG:")),
            Some("+CEREG: 2,5")
        );
    }

    #[test]
    fn bare_payload_skips_echo_and_unsolicited_lines() {
        let buf = lines("AT+NSOCR=\"DGRAM\",17,1234,1\r\n+CEREG: 1\r\n0\r\nOK\r\n");
        assert_eq!(find_payload(&buf, Expect::Bare), Some("0"));

        assert_eq!(find_payload(&lines("OK\r\n"), Expect::Bare), None);
    }

    #[test]
    fn splits_socket_data_reply() {
        let fields =
            split_fields::<8>("1,\"10.0.0.1\",4242,5,AABBCCDDEE,0", None).unwrap();
        assert_eq!(
            fields.as_slice(),
            ["1", "10.0.0.1", "4242", "5", "AABBCCDDEE", "0"]
        );
    }

    #[test]
    fn strips_prefix_and_keeps_empty_fields() {
        let fields = split_fields::<4>("+CEREG: 2,,1,", Some("+CEREG")).unwrap();
        assert_eq!(fields.as_slice(), ["2", "", "1", ""]);

        let fields = split_fields::<4>("+CGSN:357517080049321", Some("+CGSN:")).unwrap();
        assert_eq!(fields.as_slice(), ["357517080049321"]);
    }

    #[test]
    fn quoted_commas_do_not_split() {
        let fields = split_fields::<4>("+COPS: 1,2,\"24,201\"", Some("+COPS:")).unwrap();
        assert_eq!(fields.as_slice(), ["1", "2", "24,201"]);
    }

    #[test]
    fn too_many_fields_is_a_protocol_error() {
        assert_eq!(
            split_fields::<2>("1,2,3", None),
            Err(ProtocolError::FieldCount)
        );
        assert_eq!(
            split_fields::<2>("+CSQ: 1,2", Some("+CEREG:")),
            Err(ProtocolError::MissingPayload)
        );
    }
}
