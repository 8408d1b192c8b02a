use std::collections::HashMap;
use std::io;

use apns_loader::SettingsIndex;
use apns_protocol::{CarrierEntry, CarrierId, CarrierSettings};

use crate::escape::{escape_text, quote_attr};
use crate::{
    ApnAttributeMapper, AttributeMapper, RenderedDocument, Result, WriterConfig, WriterError,
};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Name of the document written by the extractor
pub const OUTPUT_FILE_NAME: &str = "apns-full-conf.xml";

const ELEMENT_INDENT: &str = "  ";
const ATTRIBUTE_INDENT: &str = "      ";

/// Lookup of carrier settings by canonical name
pub trait SettingsSource {
    fn settings_for(&self, canonical_name: &str) -> Option<&CarrierSettings>;
}

impl SettingsSource for SettingsIndex {
    fn settings_for(&self, canonical_name: &str) -> Option<&CarrierSettings> {
        self.get(canonical_name)
    }
}

impl SettingsSource for HashMap<String, CarrierSettings> {
    fn settings_for(&self, canonical_name: &str) -> Option<&CarrierSettings> {
        self.get(canonical_name)
    }
}

/// Renders `apns-full-conf.xml` in the AOSP layout.
///
/// XML libraries cannot reproduce this layout (attributes on their own
/// lines, blank lines between elements, closing `/>` on its own line), so
/// the text is assembled directly.
#[derive(Default)]
pub struct DocumentWriter {
    config: WriterConfig,
}

impl DocumentWriter {
    pub fn new(config: WriterConfig) -> Result<Self> {
        config.validate().map_err(WriterError::invalid_config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Render one block per APN: index order outside, APN order inside.
    pub fn render<S, M>(
        &self,
        entries: &[CarrierEntry],
        settings: &S,
        mapper: &M,
    ) -> Result<RenderedDocument>
    where
        S: SettingsSource + ?Sized,
        M: AttributeMapper + ?Sized,
    {
        let mut text = String::new();
        text.push_str(XML_DECLARATION);
        text.push_str("\n\n");
        text.push_str(&format!("<apns version=\"{}\">\n\n", self.config.root_version));

        let default_id = CarrierId::default();
        let mut apn_blocks = 0;
        for entry in entries {
            let name = entry.canonical_name();
            let carrier_settings = settings
                .settings_for(name)
                .ok_or_else(|| WriterError::UnresolvedReference(name.to_string()))?;
            let carrier_id = entry.carrier_id.as_ref().unwrap_or(&default_id);

            for apn in carrier_settings.apn_items() {
                text.push_str(ELEMENT_INDENT);
                text.push_str("<apn carrier=");
                text.push_str(&quote_attr(apn.name()));
                text.push('\n');

                for attr in mapper.map(apn, carrier_id)? {
                    text.push_str(ATTRIBUTE_INDENT);
                    text.push_str(&escape_text(attr.name));
                    text.push('=');
                    text.push_str(&quote_attr(&attr.value));
                    text.push('\n');
                }

                text.push_str(ELEMENT_INDENT);
                text.push_str("/>\n\n");
                apn_blocks += 1;
            }
            log::debug!("{name}: {} APNs", carrier_settings.apn_items().len());
        }

        text.push_str("</apns>\n");

        Ok(RenderedDocument { text, apn_blocks })
    }

    /// Render, then write the finished text to `out`.
    pub fn write_to<S, M, W>(
        &self,
        out: &mut W,
        entries: &[CarrierEntry],
        settings: &S,
        mapper: &M,
    ) -> Result<RenderedDocument>
    where
        S: SettingsSource + ?Sized,
        M: AttributeMapper + ?Sized,
        W: io::Write + ?Sized,
    {
        let document = self.render(entries, settings, mapper)?;
        out.write_all(document.text.as_bytes())?;
        out.flush()?;
        Ok(document)
    }
}

/// Render with the default configuration and attribute mapping
pub fn render_document<S>(entries: &[CarrierEntry], settings: &S) -> Result<RenderedDocument>
where
    S: SettingsSource + ?Sized,
{
    DocumentWriter::default().render(entries, settings, &ApnAttributeMapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApnAttribute;
    use crate::validate::is_xml_char;
    use crate::validate_document;
    use apns_protocol::{ApnItem, ApnList, ApnType, Mvno};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn entry(name: &str, mcc_mnc: &str, mvno: Option<Mvno>) -> CarrierEntry {
        CarrierEntry {
            canonical_name: Some(name.to_string()),
            carrier_id: Some(CarrierId {
                mcc_mnc: Some(mcc_mnc.to_string()),
                mvno,
            }),
        }
    }

    fn settings(name: &str, apns: Vec<ApnItem>) -> (String, CarrierSettings) {
        (
            name.to_string(),
            CarrierSettings {
                canonical_name: Some(name.to_string()),
                version: None,
                apns: Some(ApnList { apn: apns }),
            },
        )
    }

    fn apn(name: &str, value: &str, types: &[ApnType]) -> ApnItem {
        ApnItem {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
            r#type: types.iter().map(|ty| *ty as i32).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn renders_legacy_layout() {
        let entries = vec![entry("op1", "310260", Some(Mvno::Gid1("BA00".to_string())))];
        let map: HashMap<_, _> = [settings(
            "op1",
            vec![apn("Op \"One\"", "op1.apn", &[ApnType::Default])],
        )]
        .into_iter()
        .collect();

        let document = render_document(&entries, &map).unwrap();

        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
            "\n",
            "<apns version=\"8\">\n",
            "\n",
            "  <apn carrier='Op \"One\"'\n",
            "      mcc=\"310\"\n",
            "      mnc=\"260\"\n",
            "      apn=\"op1.apn\"\n",
            "      type=\"default\"\n",
            "      mvno_type=\"gid\"\n",
            "      mvno_match_data=\"BA00\"\n",
            "  />\n",
            "\n",
            "</apns>\n",
        );
        assert_eq!(document.text, expected);
        assert_eq!(document.apn_blocks, 1);
    }

    #[test]
    fn empty_index_renders_header_and_footer_only() {
        let map: HashMap<String, CarrierSettings> = HashMap::new();
        let document = render_document(&[], &map).unwrap();
        assert_eq!(
            document.text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\n<apns version=\"8\">\n\n</apns>\n"
        );
        assert_eq!(document.apn_blocks, 0);
    }

    #[test]
    fn blocks_follow_index_then_apn_order() {
        let entries = vec![
            entry("b", "26202", None),
            entry("a", "310260", None),
            entry("b", "26202", None),
        ];
        let map: HashMap<_, _> = [
            settings(
                "a",
                vec![apn("A1", "a1", &[]), apn("A2", "a2", &[ApnType::Mms])],
            ),
            settings("b", vec![apn("B1", "b1", &[ApnType::Default])]),
        ]
        .into_iter()
        .collect();

        let document = render_document(&entries, &map).unwrap();

        let carriers: Vec<&str> = document
            .text
            .lines()
            .filter_map(|line| line.strip_prefix("  <apn carrier="))
            .collect();
        assert_eq!(carriers, vec!["\"B1\"", "\"A1\"", "\"A2\"", "\"B1\""]);
        assert_eq!(document.apn_blocks, 4);
    }

    #[test]
    fn unresolved_entry_is_fatal() {
        let entries = vec![entry("ghost", "310260", None)];
        let map: HashMap<String, CarrierSettings> = HashMap::new();

        let err = render_document(&entries, &map).unwrap_err();
        assert!(matches!(err, WriterError::UnresolvedReference(name) if name == "ghost"));
    }

    struct FixedMapper;

    impl AttributeMapper for FixedMapper {
        fn map(&self, _apn: &ApnItem, _carrier_id: &CarrierId) -> Result<Vec<ApnAttribute>> {
            Ok(vec![ApnAttribute::new("a<b", "x&y")])
        }
    }

    #[test]
    fn custom_mapper_and_version() {
        let writer = DocumentWriter::new(WriterConfig {
            root_version: "9".to_string(),
        })
        .unwrap();
        let entries = vec![entry("a", "001", None)];
        let map: HashMap<_, _> = [settings("a", vec![ApnItem::default()])]
            .into_iter()
            .collect();

        let mut out = Vec::new();
        let document = writer
            .write_to(&mut out, &entries, &map, &FixedMapper)
            .unwrap();

        assert_eq!(out, document.text.as_bytes());
        assert!(document.text.contains("<apns version=\"9\">\n"));
        assert!(document
            .text
            .contains("  <apn carrier=\"\"\n      a&lt;b=\"x&amp;y\"\n  />\n"));
    }

    #[test]
    fn rejects_invalid_config() {
        let err = DocumentWriter::new(WriterConfig {
            root_version: String::new(),
        })
        .err()
        .unwrap();
        assert!(matches!(err, WriterError::InvalidConfig(_)));
    }

    proptest! {
        #[test]
        fn rendered_strings_parse_back_unless_xml_forbids_them(
            name in any::<String>(),
            value in any::<String>(),
        ) {
            let entries = vec![entry("op", "310260", None)];
            let map: HashMap<_, _> = [settings(
                "op",
                vec![ApnItem {
                    name: Some(name.clone()),
                    value: Some(value.clone()),
                    ..Default::default()
                }],
            )]
            .into_iter()
            .collect();

            let document = render_document(&entries, &map).unwrap();
            let clean = name.chars().chain(value.chars()).all(is_xml_char);

            match validate_document(&document.text) {
                Ok(report) => {
                    prop_assert!(clean);
                    prop_assert_eq!(report.apn_elements, 1);
                }
                Err(err) => {
                    prop_assert!(!clean, "rejected clean input: {err}");
                    prop_assert!(matches!(err, WriterError::MalformedOutput(_)));
                }
            }
        }
    }
}
