use apns_protocol::{ApnItem, ApnType, CarrierId, Protocol, Xlat};

use crate::{ApnAttribute, Result};

const MCC_LEN: usize = 3;

/// Turns one APN plus its carrier id into ordered attributes
pub trait AttributeMapper {
    fn map(&self, apn: &ApnItem, carrier_id: &CarrierId) -> Result<Vec<ApnAttribute>>;
}

/// Attribute mapping of `apns-full-conf.xml`.
///
/// Only fields present in the record produce attributes; `mcc`, `mnc` and
/// `type` are always written.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApnAttributeMapper;

impl AttributeMapper for ApnAttributeMapper {
    fn map(&self, apn: &ApnItem, carrier_id: &CarrierId) -> Result<Vec<ApnAttribute>> {
        let (mcc, mnc) = split_mcc_mnc(carrier_id.mcc_mnc.as_deref().unwrap_or_default());

        let mut attrs = Attributes::default();
        attrs.push("mcc", mcc);
        attrs.push("mnc", mnc);
        attrs.push_present("apn", apn.value.as_deref());
        attrs.push_present("proxy", apn.proxy.as_deref());
        attrs.push_present("port", apn.port.as_deref());
        attrs.push_present("mmsc", apn.mmsc.as_deref());
        attrs.push_present("mmsproxy", apn.mmsc_proxy.as_deref());
        attrs.push_present("mmsport", apn.mmsc_proxy_port.as_deref());
        attrs.push_present("user", apn.user.as_deref());
        attrs.push_present("password", apn.password.as_deref());
        attrs.push_present("server", apn.server.as_deref());
        attrs.push_present("authtype", apn.authtype);
        attrs.push("type", render_types(&apn.r#type));
        attrs.push_enum("protocol", apn.protocol, protocol_name);
        attrs.push_enum("roaming_protocol", apn.roaming_protocol, protocol_name);
        attrs.push_present("carrier_enabled", apn.carrier_enabled);
        attrs.push_present("bearer_bitmask", apn.bearer_bitmask);
        attrs.push_present("profile_id", apn.profile_id);
        attrs.push_present("modem_cognitive", apn.modem_cognitive);
        attrs.push_present("max_conns", apn.max_conns);
        attrs.push_present("wait_time", apn.wait_time);
        attrs.push_present("max_conns_time", apn.max_conns_time);
        attrs.push_present("mtu", apn.mtu);
        if let Some(mvno) = &carrier_id.mvno {
            let name = mvno.variant_name();
            attrs.push("mvno_type", if name.starts_with("gid") { "gid" } else { name });
            attrs.push("mvno_match_data", mvno.match_data());
        }
        attrs.push_present("apn_set_id", apn.apn_set_id);
        // No integer carrier_id field to source a `carrier_id` attribute from.
        attrs.push_enum("skip_464xlat", apn.skip_464xlat, xlat_name);
        attrs.push_present("user_visible", apn.user_visible);
        attrs.push_present("user_editable", apn.user_editable);

        Ok(attrs.0)
    }
}

/// Split `mcc_mnc` after the third character.
///
/// Shorter input is all MCC with an empty MNC.
pub fn split_mcc_mnc(mcc_mnc: &str) -> (&str, &str) {
    let at = mcc_mnc
        .char_indices()
        .nth(MCC_LEN)
        .map_or(mcc_mnc.len(), |(idx, _)| idx);
    mcc_mnc.split_at(at)
}

/// Comma-joined, lower-cased type names in record order.
///
/// Codes missing from the `ApnType` table are skipped, the same way a proto2
/// decoder sets aside enum values it does not know.
pub fn render_types(codes: &[i32]) -> String {
    codes
        .iter()
        .filter_map(|&code| {
            let name = ApnType::from_code(code).map(ApnType::as_str_name);
            if name.is_none() {
                log::warn!("Skipping unknown APN type code {code}");
            }
            name
        })
        .collect::<Vec<_>>()
        .join(",")
        .to_lowercase()
}

fn protocol_name(code: i32) -> Option<&'static str> {
    Protocol::from_code(code).map(Protocol::as_str_name)
}

fn xlat_name(code: i32) -> Option<&'static str> {
    Xlat::from_code(code).map(Xlat::as_str_name)
}

#[derive(Default)]
struct Attributes(Vec<ApnAttribute>);

impl Attributes {
    fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push(ApnAttribute::new(name, value));
    }

    /// Booleans render as `true`/`false`, numbers in decimal.
    fn push_present<T: ToString>(&mut self, name: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(name, value.to_string());
        }
    }

    /// An unknown code counts as an absent field.
    fn push_enum(
        &mut self,
        name: &'static str,
        code: Option<i32>,
        resolve: fn(i32) -> Option<&'static str>,
    ) {
        let Some(code) = code else { return };
        match resolve(code) {
            Some(symbol) => self.push(name, symbol),
            None => log::warn!("Dropping {name} with unknown value {code}"),
        }
    }
}
