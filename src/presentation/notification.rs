use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Webhook subscription for changes of a figo resource
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Notification {
    /// Internal figo identifier of the notification, assigned on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    /// Path pattern of the resources to observe, e.g. `/rest/transactions`
    pub observe_key: String,
    /// URI the service calls when an observed resource changes
    pub notify_uri: String,
    /// Opaque value echoed back on every call to `notify_uri`
    #[serde(default)]
    pub state: String,
}

impl Notification {
    /// Describes a new subscription; the id is assigned by the service
    pub fn new(observe_key: &str, notify_uri: &str, state: &str) -> Self {
        Self {
            notification_id: None,
            observe_key: observe_key.to_string(),
            notify_uri: notify_uri.to_string(),
            state: state.to_string(),
        }
    }
}
