//! Enum types of the APN record and their schema name tables.
//!
//! Names are the exact identifiers of the schema; callers decide on casing.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ApnType {
    All = 0,
    Default = 1,
    Mms = 2,
    Supl = 3,
    Dun = 4,
    Hipri = 5,
    Fota = 6,
    Ims = 7,
    Cbs = 8,
    Ia = 9,
    Emergency = 10,
    Xcap = 11,
    Ut = 12,
    Rcs = 13,
}

impl ApnType {
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => ApnType::All,
            1 => ApnType::Default,
            2 => ApnType::Mms,
            3 => ApnType::Supl,
            4 => ApnType::Dun,
            5 => ApnType::Hipri,
            6 => ApnType::Fota,
            7 => ApnType::Ims,
            8 => ApnType::Cbs,
            9 => ApnType::Ia,
            10 => ApnType::Emergency,
            11 => ApnType::Xcap,
            12 => ApnType::Ut,
            13 => ApnType::Rcs,
            _ => return None,
        })
    }

    pub const fn as_str_name(self) -> &'static str {
        match self {
            ApnType::All => "ALL",
            ApnType::Default => "DEFAULT",
            ApnType::Mms => "MMS",
            ApnType::Supl => "SUPL",
            ApnType::Dun => "DUN",
            ApnType::Hipri => "HIPRI",
            ApnType::Fota => "FOTA",
            ApnType::Ims => "IMS",
            ApnType::Cbs => "CBS",
            ApnType::Ia => "IA",
            ApnType::Emergency => "EMERGENCY",
            ApnType::Xcap => "XCAP",
            ApnType::Ut => "UT",
            ApnType::Rcs => "RCS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Protocol {
    Ip = 0,
    Ipv6 = 1,
    Ipv4v6 = 2,
    Ppp = 3,
}

impl Protocol {
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Protocol::Ip,
            1 => Protocol::Ipv6,
            2 => Protocol::Ipv4v6,
            3 => Protocol::Ppp,
            _ => return None,
        })
    }

    pub const fn as_str_name(self) -> &'static str {
        match self {
            Protocol::Ip => "IP",
            Protocol::Ipv6 => "IPV6",
            Protocol::Ipv4v6 => "IPV4V6",
            Protocol::Ppp => "PPP",
        }
    }
}

/// 464XLAT behaviour override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Xlat {
    Skip464xlatDefault = 0,
    Skip464xlatDisable = 1,
    Skip464xlatEnable = 2,
}

impl Xlat {
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Xlat::Skip464xlatDefault,
            1 => Xlat::Skip464xlatDisable,
            2 => Xlat::Skip464xlatEnable,
            _ => return None,
        })
    }

    pub const fn as_str_name(self) -> &'static str {
        match self {
            Xlat::Skip464xlatDefault => "SKIP_464XLAT_DEFAULT",
            Xlat::Skip464xlatDisable => "SKIP_464XLAT_DISABLE",
            Xlat::Skip464xlatEnable => "SKIP_464XLAT_ENABLE",
        }
    }
}
