use clap::ValueEnum;

/// Server regions a player can be looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum RegionKey {
    Na,
    Euw,
    Eune,
    Kr,
    Jp,
    Br,
    Lan,
    Las,
    Oce,
    Tr,
    Ru,
}

/// Routing hosts for one region. Summoner and league endpoints live on the
/// platform host, account and match endpoints on the regional host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub platform: &'static str,
    pub regional: &'static str,
}

impl RegionKey {
    pub const ALL: [RegionKey; 11] = [
        RegionKey::Na,
        RegionKey::Euw,
        RegionKey::Eune,
        RegionKey::Kr,
        RegionKey::Jp,
        RegionKey::Br,
        RegionKey::Lan,
        RegionKey::Las,
        RegionKey::Oce,
        RegionKey::Tr,
        RegionKey::Ru,
    ];

    pub fn resolve(self) -> RouteInfo {
        let (platform, regional) = match self {
            RegionKey::Na => ("na1", "americas"),
            RegionKey::Euw => ("euw1", "europe"),
            RegionKey::Eune => ("eun1", "europe"),
            RegionKey::Kr => ("kr", "asia"),
            RegionKey::Jp => ("jp1", "asia"),
            RegionKey::Br => ("br1", "americas"),
            RegionKey::Lan => ("la1", "americas"),
            RegionKey::Las => ("la2", "americas"),
            RegionKey::Oce => ("oc1", "sea"),
            RegionKey::Tr => ("tr1", "europe"),
            RegionKey::Ru => ("ru", "europe"),
        };
        RouteInfo { platform, regional }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionKey::Na => "NA",
            RegionKey::Euw => "EUW",
            RegionKey::Eune => "EUNE",
            RegionKey::Kr => "KR",
            RegionKey::Jp => "JP",
            RegionKey::Br => "BR",
            RegionKey::Lan => "LAN",
            RegionKey::Las => "LAS",
            RegionKey::Oce => "OCE",
            RegionKey::Tr => "TR",
            RegionKey::Ru => "RU",
        }
    }
}
