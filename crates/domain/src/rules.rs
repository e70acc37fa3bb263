//! Per-zone NAT rule table.
//!
//! The table is an *ordered* list of zones, each carrying an optional
//! upstream resolver override and an ordered list of subnet mappings.
//! Order is semantic: the persisted order is the priority order for
//! first-match-wins resolution, so deserialization preserves document
//! order instead of going through a sorted or hashed map.

use ipnetwork::Ipv4Network;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// One NAT pair: addresses inside `real` are shifted into `nat`,
/// preserving the offset from the network address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetMapping {
    pub real: Ipv4Network,
    pub nat: Ipv4Network,
}

#[derive(Debug, Clone, Default)]
pub struct ZoneRule {
    /// Upstream resolver override for queries in this zone.
    pub resolver: Option<IpAddr>,

    /// Ordered NAT pairs; the first `real` subnet containing an address wins.
    pub mappings: Vec<SubnetMapping>,
}

/// Ordered zone → rule mapping, one snapshot per request.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    /// Zone names are lowercase with no trailing dot.
    pub zones: Vec<(String, ZoneRule)>,
}

/// Dot-delimited suffix match: `name` is the zone itself or a strict
/// subdomain of it. `notexample.com` does not match zone `example.com`.
pub fn is_subdomain_of(name: &str, zone: &str) -> bool {
    name == zone || name.ends_with(&format!(".{zone}"))
}

impl RuleTable {
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// First configured zone (stored order) the query name belongs to.
    pub fn zone_for(&self, name: &str) -> Option<&str> {
        self.zones
            .iter()
            .find(|(zone, _)| is_subdomain_of(name, zone))
            .map(|(zone, _)| zone.as_str())
    }

    /// First matching zone that defines a resolver override. Matching zones
    /// without an override are skipped; `None` means the caller falls back
    /// to the default resolver.
    pub fn resolver_for(&self, name: &str) -> Option<IpAddr> {
        self.zones
            .iter()
            .find(|(zone, rule)| is_subdomain_of(name, zone) && rule.resolver.is_some())
            .and_then(|(_, rule)| rule.resolver)
    }

    /// Translate an IPv4 answer address for a query name.
    ///
    /// Scans zones in stored order; within each matching zone, the first
    /// `real` subnet containing the address maps it into the paired `nat`
    /// subnet at the same offset. A matching zone whose mappings do not
    /// contain the address does not stop the scan. Addresses outside every
    /// mapped subnet come back unchanged.
    ///
    /// No bounds check is performed: a `real`/`nat` pair with different
    /// prefix lengths can yield an address outside `nat`.
    pub fn translate_v4(&self, name: &str, addr: Ipv4Addr) -> Ipv4Addr {
        for (zone, rule) in &self.zones {
            if !is_subdomain_of(name, zone) {
                continue;
            }
            for mapping in &rule.mappings {
                if mapping.real.contains(addr) {
                    let offset = u32::from(addr) - u32::from(mapping.real.network());
                    return Ipv4Addr::from(u32::from(mapping.nat.network()).wrapping_add(offset));
                }
            }
        }
        addr
    }
}

// ── order-preserving deserialization ───────────────────────────────────────

impl<'de> Deserialize<'de> for RuleTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = RuleTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of zone name to zone rule")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut zones = Vec::new();
                while let Some((zone, rule)) = map.next_entry::<String, ZoneRule>()? {
                    let zone = zone.trim_end_matches('.').to_ascii_lowercase();
                    zones.push((zone, rule));
                }
                Ok(RuleTable { zones })
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

impl<'de> Deserialize<'de> for ZoneRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleVisitor;

        impl<'de> Visitor<'de> for RuleVisitor {
            type Value = ZoneRule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a zone rule with optional resolver and subnet mappings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut resolver = None;
                let mut mappings = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "resolver" => {
                            // An absent or empty resolver field means "no override".
                            if let Some(text) = map.next_value::<Option<String>>()? {
                                if !text.is_empty() {
                                    let ip: IpAddr = text.parse().map_err(|e| {
                                        de::Error::custom(format!(
                                            "invalid resolver address '{text}': {e}"
                                        ))
                                    })?;
                                    resolver = Some(ip);
                                }
                            }
                        }
                        "mappings" => {
                            mappings = map.next_value::<MappingList>()?.0;
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(ZoneRule { resolver, mappings })
            }
        }

        deserializer.deserialize_map(RuleVisitor)
    }
}

struct MappingList(Vec<SubnetMapping>);

impl<'de> Deserialize<'de> for MappingList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MappingsVisitor;

        impl<'de> Visitor<'de> for MappingsVisitor {
            type Value = MappingList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of real subnet CIDR to NAT subnet CIDR")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut mappings = Vec::new();
                while let Some((real, nat)) = map.next_entry::<String, String>()? {
                    let real_net: Ipv4Network = real.parse().map_err(|e| {
                        de::Error::custom(format!("invalid real subnet '{real}': {e}"))
                    })?;
                    let nat_net: Ipv4Network = nat.parse().map_err(|e| {
                        de::Error::custom(format!("invalid NAT subnet '{nat}': {e}"))
                    })?;
                    mappings.push(SubnetMapping {
                        real: real_net,
                        nat: nat_net,
                    });
                }
                Ok(MappingList(mappings))
            }
        }

        deserializer.deserialize_map(MappingsVisitor)
    }
}
