/// One access point configuration.
///
/// Enum-typed fields hold the raw wire code; resolve them through
/// [`crate::ApnType`], [`crate::Protocol`] and [`crate::Xlat`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApnItem {
    /// Display name, written as the `carrier` attribute.
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// The APN itself.
    #[prost(string, optional, tag = "2")]
    pub value: Option<String>,
    #[prost(enumeration = "crate::ApnType", repeated, packed = "false", tag = "3")]
    pub r#type: Vec<i32>,
    #[prost(int32, optional, tag = "4")]
    pub bearer_bitmask: Option<i32>,
    #[prost(string, optional, tag = "5")]
    pub server: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub proxy: Option<String>,
    #[prost(string, optional, tag = "7")]
    pub port: Option<String>,
    #[prost(string, optional, tag = "8")]
    pub user: Option<String>,
    #[prost(string, optional, tag = "9")]
    pub password: Option<String>,
    #[prost(int32, optional, tag = "10")]
    pub authtype: Option<i32>,
    #[prost(string, optional, tag = "11")]
    pub mmsc: Option<String>,
    #[prost(string, optional, tag = "12")]
    pub mmsc_proxy: Option<String>,
    #[prost(string, optional, tag = "13")]
    pub mmsc_proxy_port: Option<String>,
    #[prost(enumeration = "crate::Protocol", optional, tag = "14")]
    pub protocol: Option<i32>,
    #[prost(enumeration = "crate::Protocol", optional, tag = "15")]
    pub roaming_protocol: Option<i32>,
    #[prost(int32, optional, tag = "16")]
    pub mtu: Option<i32>,
    #[prost(int32, optional, tag = "17")]
    pub profile_id: Option<i32>,
    #[prost(int32, optional, tag = "18")]
    pub max_conns: Option<i32>,
    #[prost(int32, optional, tag = "19")]
    pub wait_time: Option<i32>,
    #[prost(int32, optional, tag = "20")]
    pub max_conns_time: Option<i32>,
    #[prost(bool, optional, tag = "21")]
    pub carrier_enabled: Option<bool>,
    #[prost(bool, optional, tag = "22")]
    pub modem_cognitive: Option<bool>,
    #[prost(bool, optional, tag = "23")]
    pub user_visible: Option<bool>,
    #[prost(bool, optional, tag = "24")]
    pub user_editable: Option<bool>,
    #[prost(int32, optional, tag = "25")]
    pub apn_set_id: Option<i32>,
    #[prost(enumeration = "crate::Xlat", optional, tag = "26")]
    pub skip_464xlat: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApnList {
    #[prost(message, repeated, tag = "1")]
    pub apn: Vec<ApnItem>,
}

/// Settings for one carrier, keyed by its canonical name.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CarrierSettings {
    #[prost(string, optional, tag = "1")]
    pub canonical_name: Option<String>,
    #[prost(int64, optional, tag = "2")]
    pub version: Option<i64>,
    #[prost(message, optional, tag = "3")]
    pub apns: Option<ApnList>,
}

impl CarrierSettings {
    /// APNs in source order; empty when the record carries no APN list.
    pub fn apn_items(&self) -> &[ApnItem] {
        self.apns.as_ref().map_or(&[], |list| list.apn.as_slice())
    }
}

/// The combined record holding settings for many carriers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MultiCarrierSettings {
    #[prost(int64, optional, tag = "1")]
    pub version: Option<i64>,
    #[prost(message, repeated, tag = "2")]
    pub setting: Vec<CarrierSettings>,
}
