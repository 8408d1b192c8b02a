/// Identifies a carrier by MCC/MNC plus an optional MVNO match rule.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CarrierId {
    /// MCC (first three digits) followed by the MNC.
    #[prost(string, optional, tag = "1")]
    pub mcc_mnc: Option<String>,
    #[prost(oneof = "Mvno", tags = "2, 3, 4, 5")]
    pub mvno: Option<Mvno>,
}

/// MVNO match data; at most one branch is set.
#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum Mvno {
    #[prost(string, tag = "2")]
    Spn(String),
    #[prost(string, tag = "3")]
    Imsi(String),
    #[prost(string, tag = "4")]
    Gid1(String),
    #[prost(string, tag = "5")]
    Gid2(String),
}

impl Mvno {
    /// Schema name of the active branch.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Mvno::Spn(_) => "spn",
            Mvno::Imsi(_) => "imsi",
            Mvno::Gid1(_) => "gid1",
            Mvno::Gid2(_) => "gid2",
        }
    }

    pub fn match_data(&self) -> &str {
        match self {
            Mvno::Spn(value) | Mvno::Imsi(value) | Mvno::Gid1(value) | Mvno::Gid2(value) => value,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CarrierEntry {
    #[prost(string, optional, tag = "1")]
    pub canonical_name: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub carrier_id: Option<CarrierId>,
}

/// The index record. Entry order is output order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CarrierList {
    #[prost(message, repeated, tag = "1")]
    pub entry: Vec<CarrierEntry>,
    #[prost(int64, optional, tag = "2")]
    pub version: Option<i64>,
}
