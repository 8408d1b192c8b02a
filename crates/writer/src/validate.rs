use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{Result, WriterError};

/// What a well-formed document was found to contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Name of the single root element
    pub root: String,

    /// `<apn>` elements directly under the root
    pub apn_elements: usize,
}

/// Re-parse rendered text as generic XML.
///
/// Any failure here is a rendering defect, never an input problem.
pub fn validate_document(text: &str) -> Result<ValidationReport> {
    let mut reader = Reader::from_str(text);
    let mut depth = 0usize;
    let mut root: Option<String> = None;
    let mut apn_elements = 0;

    loop {
        let event = reader.read_event().map_err(|err| {
            WriterError::malformed(format!("at byte {}: {err}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                check_attributes(element)?;
                if depth == 0 {
                    if let Some(existing) = &root {
                        return Err(WriterError::malformed(format!(
                            "second root element after <{existing}>"
                        )));
                    }
                    root = Some(String::from_utf8_lossy(element.name().as_ref()).into_owned());
                } else if depth == 1 && element.name().as_ref() == b"apn" {
                    apn_elements += 1;
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| WriterError::malformed("closing tag without opening tag"))?;
            }
            Event::Text(ref text) if depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(WriterError::malformed("text outside the root element"));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(WriterError::malformed(format!(
            "{depth} element(s) left open at end of document"
        )));
    }
    let root = root.ok_or_else(|| WriterError::malformed("no root element"))?;

    Ok(ValidationReport { root, apn_elements })
}

fn check_attributes(element: &BytesStart<'_>) -> Result<()> {
    for attr in element.attributes() {
        let attr = attr.map_err(|err| WriterError::malformed(err.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|err| WriterError::malformed(err.to_string()))?;
        if let Some(c) = value.chars().find(|&c| !is_xml_char(c)) {
            return Err(WriterError::malformed(format!(
                "attribute {} contains character U+{:04X} not allowed in XML 1.0",
                String::from_utf8_lossy(attr.key.as_ref()),
                u32::from(c)
            )));
        }
    }
    Ok(())
}

/// XML 1.0 `Char` production. Surrogates cannot occur in a `char`.
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
