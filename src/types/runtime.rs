use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

use crate::errors::{ChecklyError, Result};

/// Runtime environment (Node.js and library versions) checks execute in
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Runtime {
    pub name: String,
    pub multi_step_support: bool,
    pub stage: String,
    pub runtime_end_of_life: String,
    pub description: String,
}

/// Public address range Checkly runs checks from, per region
///
/// See <https://www.checklyhq.com/docs/monitoring/allowlisting/#ip-range-allowlisting>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIp {
    pub region: String,
    pub address: IpAddr,
    pub prefix_len: u8,
}

impl StaticIp {
    /// Parse a CIDR range such as `2a05:d014:ac6::/56`
    pub(crate) fn from_cidr(region: &str, cidr: &str) -> Result<Self> {
        let invalid = || ChecklyError::InvalidStaticIp(cidr.to_string());
        let (address, prefix_len) = cidr.split_once('/').ok_or_else(invalid)?;
        let address: IpAddr = address.parse().map_err(|_| invalid())?;
        let prefix_len: u8 = prefix_len.parse().map_err(|_| invalid())?;
        if prefix_len > max_prefix_len(&address) {
            return Err(invalid());
        }
        Ok(Self {
            region: region.to_string(),
            address,
            prefix_len,
        })
    }

    /// Parse a single address as a host range (`/32` or `/128`)
    pub(crate) fn from_addr(region: &str, addr: &str) -> Result<Self> {
        let address: IpAddr = addr
            .parse()
            .map_err(|_| ChecklyError::InvalidStaticIp(addr.to_string()))?;
        Ok(Self {
            region: region.to_string(),
            prefix_len: max_prefix_len(&address),
            address,
        })
    }
}

impl Display for StaticIp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

fn max_prefix_len(address: &IpAddr) -> u8 {
    match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_ip_from_cidr() {
        let ip = StaticIp::from_cidr("eu-central-1", "2a05:d014:ac6:e00::/56").unwrap();
        assert!(ip.address.is_ipv6());
        assert_eq!(ip.prefix_len, 56);
        assert_eq!(ip.region, "eu-central-1");
    }

    #[test]
    fn test_static_ip_from_addr() {
        let ip = StaticIp::from_addr("us-east-1", "3.212.137.198").unwrap();
        assert_eq!(ip.prefix_len, 32);
        assert_eq!(ip.to_string(), "3.212.137.198/32");
    }

    #[test]
    fn test_static_ip_rejects_garbage() {
        assert!(StaticIp::from_cidr("x", "10.0.0.1").is_err());
        assert!(StaticIp::from_cidr("x", "10.0.0.1/33").is_err());
        assert!(StaticIp::from_cidr("x", "nope/8").is_err());
        assert!(matches!(
            StaticIp::from_addr("x", "300.1.1.1"),
            Err(ChecklyError::InvalidStaticIp(value)) if value == "300.1.1.1"
        ));
    }
}
