//! Response envelope unwrapping
//!
//! Every successful service response is a single value wrapped as
//! `<?xml ...?><string xmlns="http://www.chemspider.com/">VALUE</string>`.
//! The body is read with an XML reader so escaped identifiers come back
//! unescaped.

use crate::core::constants::envelope::STRING_ELEMENT;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// Errors raised while unwrapping a response body
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Malformed XML in response: {0}")]
    Malformed(String),

    #[error("Unexpected element <{0}> in response")]
    UnexpectedElement(String),

    #[error("Unexpected text outside the string element: {0:?}")]
    UnexpectedText(String),

    #[error("Response ended inside the string element")]
    Unclosed,
}

fn malformed(err: impl std::fmt::Display) -> EnvelopeError {
    EnvelopeError::Malformed(err.to_string())
}

/// Extract the value wrapped by the `<string>` element of a response body
///
/// The declaration and any comments or processing instructions are skipped
/// and the value is trimmed. A self-closing or empty element yields an empty
/// string. A body with no markup at all is returned trimmed.
pub fn unwrap_string_envelope(body: &str) -> Result<String, EnvelopeError> {
    // Text is kept untrimmed so whitespace between text and CDATA survives
    let mut reader = Reader::from_str(body);

    let mut value: Option<String> = None;
    let mut inside = false;
    let mut stray = String::new();

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) => {
                if inside || value.is_some() || e.local_name().as_ref() != STRING_ELEMENT {
                    return Err(EnvelopeError::UnexpectedElement(
                        String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    ));
                }
                inside = true;
                value = Some(String::new());
            }
            Event::Empty(e) => {
                if inside || value.is_some() || e.local_name().as_ref() != STRING_ELEMENT {
                    return Err(EnvelopeError::UnexpectedElement(
                        String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    ));
                }
                value = Some(String::new());
            }
            Event::End(_) => inside = false,
            Event::Text(t) => {
                let text = t.unescape().map_err(malformed)?;
                match value.as_mut() {
                    Some(v) if inside => v.push_str(&text),
                    _ => stray.push_str(&text),
                }
            }
            Event::CData(c) => {
                let text = String::from_utf8(c.into_inner().into_owned()).map_err(malformed)?;
                match value.as_mut() {
                    Some(v) if inside => v.push_str(&text),
                    _ => stray.push_str(&text),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if inside {
        return Err(EnvelopeError::Unclosed);
    }

    // Whitespace around the element is formatting, anything else is not
    let stray = stray.trim();
    match value {
        Some(v) if stray.is_empty() => Ok(v.trim().to_string()),
        Some(_) => Err(EnvelopeError::UnexpectedText(stray.to_string())),
        None => Ok(stray.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::envelope::NAMESPACE;

    const DECL: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

    fn envelope(value: &str) -> String {
        format!(r#"{DECL}<string xmlns="{NAMESPACE}">{value}</string>"#)
    }

    #[test]
    fn test_unwraps_standard_envelope() {
        let body = envelope("InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3");
        assert_eq!(
            unwrap_string_envelope(&body).unwrap(),
            "InChI=1S/C4H10O/c1-3-4(2)5/h4-5H,3H2,1-2H3"
        );
    }

    #[test]
    fn test_strips_whitespace_around_and_inside() {
        let body = format!(
            "\n  {DECL}\r\n<string xmlns=\"http://www.chemspider.com/\">\n   OTMSDBZUPAUEDD-UHFFFAOYSA-N \n</string>\n\n"
        );
        assert_eq!(unwrap_string_envelope(&body).unwrap(), "OTMSDBZUPAUEDD-UHFFFAOYSA-N");
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(unwrap_string_envelope(&envelope("")).unwrap(), "");
        assert_eq!(unwrap_string_envelope(&envelope("   ")).unwrap(), "");
        let self_closing = format!(r#"{DECL}<string xmlns="http://www.chemspider.com/" />"#);
        assert_eq!(unwrap_string_envelope(&self_closing).unwrap(), "");
        assert_eq!(unwrap_string_envelope("").unwrap(), "");
    }

    #[test]
    fn test_unescapes_entities() {
        let body = envelope("C[C@H](N)C(=O)O &amp; &lt;x&gt;");
        assert_eq!(unwrap_string_envelope(&body).unwrap(), "C[C@H](N)C(=O)O & <x>");
    }

    #[test]
    fn test_cdata_is_taken_verbatim() {
        let body = envelope("<![CDATA[a<b&c]]>");
        assert_eq!(unwrap_string_envelope(&body).unwrap(), "a<b&c");
    }

    #[test]
    fn test_whitespace_between_text_and_cdata_is_kept() {
        let body = envelope("  a <![CDATA[b]]> c\n");
        assert_eq!(unwrap_string_envelope(&body).unwrap(), "a b c");
    }

    #[test]
    fn test_prefixed_element_is_accepted() {
        let body = r#"<cs:string xmlns:cs="http://www.chemspider.com/">CCO</cs:string>"#;
        assert_eq!(unwrap_string_envelope(body).unwrap(), "CCO");
    }

    #[test]
    fn test_bare_text_is_returned_trimmed() {
        assert_eq!(unwrap_string_envelope("  CCO \n").unwrap(), "CCO");
    }

    #[test]
    fn test_rejects_other_root_element() {
        let body = format!("{DECL}<html><body>Server Error</body></html>");
        assert_eq!(
            unwrap_string_envelope(&body),
            Err(EnvelopeError::UnexpectedElement("html".to_string()))
        );
    }

    #[test]
    fn test_rejects_nested_element() {
        let body = envelope("<b>CCO</b>");
        assert_eq!(
            unwrap_string_envelope(&body),
            Err(EnvelopeError::UnexpectedElement("b".to_string()))
        );
    }

    #[test]
    fn test_rejects_text_outside_element() {
        let body = format!("{}trailing", envelope("CCO"));
        assert_eq!(
            unwrap_string_envelope(&body),
            Err(EnvelopeError::UnexpectedText("trailing".to_string()))
        );
    }

    #[test]
    fn test_rejects_malformed_xml() {
        assert!(matches!(
            unwrap_string_envelope("<string>CCO</strin>"),
            Err(EnvelopeError::Malformed(_))
        ));
        assert!(matches!(
            unwrap_string_envelope(&envelope("&bogus;")),
            Err(EnvelopeError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_unclosed_element() {
        let result = unwrap_string_envelope("<string>CCO");
        assert!(matches!(
            result,
            Err(EnvelopeError::Unclosed) | Err(EnvelopeError::Malformed(_))
        ));
    }
}
