//! Profile API payloads

use roster_core::ExternalProfile;
use serde::Deserialize;

use crate::error::LookupError;

/// Subset of the public profile document the gate needs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfilePayload {
    unique_id: Option<String>,
    name: Option<String>,
    motto: Option<String>,
    figure_string: Option<String>,
    online: Option<bool>,
    member_since: Option<String>,
}

/// Proxy response: the upstream body as a JSON string
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: Option<String>,
}

/// Decode a profile body, unwrapping the proxy envelope when `proxied`
pub(crate) fn decode_profile(body: &[u8], proxied: bool) -> Result<ExternalProfile, LookupError> {
    let payload: ProfilePayload = if proxied {
        let envelope: ProxyEnvelope =
            serde_json::from_slice(body).map_err(|e| LookupError::Envelope(e.to_string()))?;
        let contents = envelope
            .contents
            .ok_or_else(|| LookupError::Envelope("missing contents".to_string()))?;
        serde_json::from_str(&contents).map_err(|e| LookupError::Envelope(e.to_string()))?
    } else {
        serde_json::from_slice(body).map_err(|e| LookupError::Payload(e.to_string()))?
    };

    let unique_id = payload
        .unique_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| LookupError::Payload("missing uniqueId".to_string()))?;
    let name = payload
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| LookupError::Payload("missing name".to_string()))?;

    Ok(ExternalProfile {
        unique_id,
        name,
        motto: payload.motto,
        figure_string: payload.figure_string,
        online: payload.online,
        member_since: payload.member_since,
    })
}
