use std::collections::BTreeMap;
use tracing::{debug, instrument};

use super::ChecklyClient;
use crate::errors::Result;
use crate::types::{Runtime, StaticIp};

impl ChecklyClient {
    #[instrument(name = "ChecklyClient::get_runtime", skip(self))]
    pub async fn get_runtime(&self, id: &str) -> Result<Runtime> {
        self.get_resource(self.endpoint(&["runtimes", id])?)
            .await
    }

    /// List the address ranges Checkly runs checks from
    ///
    /// IPv6 ranges come first, then IPv4 addresses as `/32` ranges. Within
    /// each family entries are ordered by region.
    #[instrument(name = "ChecklyClient::get_static_ips", skip(self))]
    pub async fn get_static_ips(&self) -> Result<Vec<StaticIp>> {
        let ipv6: BTreeMap<String, String> = self
            .get_resource(self.endpoint(&["static-ipv6s-by-region"])?)
            .await?;
        let ipv4: BTreeMap<String, Vec<String>> = self
            .get_resource(self.endpoint(&["static-ips-by-region"])?)
            .await?;

        let mut ips = Vec::with_capacity(ipv6.len() + ipv4.values().map(Vec::len).sum::<usize>());
        for (region, cidr) in &ipv6 {
            ips.push(StaticIp::from_cidr(region, cidr)?);
        }
        for (region, addresses) in &ipv4 {
            for address in addresses {
                ips.push(StaticIp::from_addr(region, address)?);
            }
        }

        debug!(count = ips.len(), "Fetched static IPs");
        Ok(ips)
    }
}
