//! Revoking the calling app's own access.

use crate::clients::RestClient;
use crate::rest::ResourceError;

/// The access granted to the calling app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiPermissions;

impl ApiPermissions {
    const NAME: &'static str = "ApiPermissions";

    /// Uninstalls the calling app from the shop. The credentials stop
    /// working once this succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if Shopify refuses the request.
    pub async fn delete(client: &RestClient) -> Result<(), ResourceError> {
        tracing::info!("revoking app access token");
        client
            .delete_with_query::<()>("api_permissions/current", None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some("current".to_string())))
    }
}
