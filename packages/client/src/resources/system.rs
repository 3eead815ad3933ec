//! Panel-wide statistics, inbounds and proxy hosts.

use sarban_api::{HostsByTag, InboundsByProtocol, SystemStats};

use crate::client::PanelClient;
use crate::error::PanelError;
use crate::transport::PanelRequest;

/// `GET /api/system`: memory, CPU, user counts and bandwidth totals.
pub async fn system_stats(client: &PanelClient) -> Result<SystemStats, PanelError> {
    client.fetch(PanelRequest::get("system")).await
}

/// `GET /api/inbounds`, grouped by protocol.
pub async fn inbounds(client: &PanelClient) -> Result<InboundsByProtocol, PanelError> {
    client.fetch(PanelRequest::get("inbounds")).await
}

/// `GET /api/hosts`, grouped by inbound tag.
pub async fn hosts(client: &PanelClient) -> Result<HostsByTag, PanelError> {
    client.fetch(PanelRequest::get("hosts")).await
}

/// `PUT /api/hosts`. Tags present in `hosts` have their host list replaced.
pub async fn modify_hosts(client: &PanelClient, hosts: &HostsByTag) -> Result<HostsByTag, PanelError> {
    client.fetch(PanelRequest::put("hosts").json(hosts)?).await
}
