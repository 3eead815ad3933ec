//! The subscription surface, `/sub/{token}/...`.
//!
//! These routes live outside `/api/` and are authorised by the token in the
//! path, so they work on a client that never logged in. The payload of
//! [`user_subscription`] and [`subscription_for_client`] depends on the
//! client application and is not always JSON.

use sarban_api::{ClientType, SubscriptionContent, SubscriptionInfo, ToQuery, UsageRange, UserUsagesResponse};

use super::segment;
use crate::client::PanelClient;
use crate::error::PanelError;
use crate::transport::PanelRequest;

pub use crate::session::subscription_link;

fn sub_path(token: &str, rest: &str) -> String {
    format!("sub/{}/{rest}", segment(token))
}

/// The subscription document the panel would serve to `user_agent`.
///
/// The panel picks the output format from the `User-Agent` header. Without
/// an override the transport's own agent is sent, which for
/// [`HttpTransport`](crate::HttpTransport) is `sarban/<version>`.
pub async fn user_subscription(
    client: &PanelClient,
    token: &str,
    user_agent: Option<&str>,
) -> Result<SubscriptionContent, PanelError> {
    let mut request = PanelRequest::subscription(sub_path(token, ""));
    if let Some(agent) = user_agent {
        request = request.header("user-agent", agent);
    }
    client.content(request).await
}

/// `GET /sub/{token}/info`
pub async fn subscription_info(
    client: &PanelClient,
    token: &str,
) -> Result<SubscriptionInfo, PanelError> {
    client
        .fetch(PanelRequest::subscription(sub_path(token, "info")))
        .await
}

/// `GET /sub/{token}/usage`
pub async fn subscription_usage(
    client: &PanelClient,
    token: &str,
    range: &UsageRange,
) -> Result<UserUsagesResponse, PanelError> {
    client
        .fetch(PanelRequest::subscription(sub_path(token, "usage")).query(range.to_query()))
        .await
}

/// `GET /sub/{token}/{client_type}`: the document for a specific client
/// application, regardless of the caller's `User-Agent`.
pub async fn subscription_for_client(
    client: &PanelClient,
    token: &str,
    client_type: ClientType,
) -> Result<SubscriptionContent, PanelError> {
    client
        .content(PanelRequest::subscription(sub_path(token, client_type.as_str())))
        .await
}
