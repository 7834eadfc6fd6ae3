//! Partial route updates.

use serde::{Deserialize, Deserializer, Serialize};

use routehub_core::error::AppError;
use routehub_core::result::AppResult;

use super::model::Route;

/// A partial update of a saved route.
///
/// Required fields (`name`, `method`, `url`) are replaced when present and
/// kept when absent or `null`. Nullable fields are tri-state: absent keeps
/// the stored value, `null` clears it, a string replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePatch {
    /// New display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New HTTP method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// New URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// New body.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<Option<String>>,
    /// New bearer token.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub bearer_token: Option<Option<String>>,
    /// New basic auth value.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub basic_auth: Option<Option<String>>,
    /// Destination folder; differs from the current one to move the route.
    #[serde(default, alias = "folder", skip_serializing_if = "Option::is_none")]
    pub new_folder: Option<String>,
}

impl RoutePatch {
    /// Applies the patch to a route, leaving placement fields untouched.
    pub fn apply_to(&self, route: &mut Route) -> AppResult<()> {
        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::validation("Route name cannot be empty"));
            }
            route.name = name.to_string();
        }
        if let Some(method) = &self.method {
            if method.trim().is_empty() {
                return Err(AppError::validation("Route method cannot be empty"));
            }
            route.method = method.clone();
        }
        if let Some(url) = &self.url {
            if url.trim().is_empty() {
                return Err(AppError::validation("Route url cannot be empty"));
            }
            route.url = url.clone();
        }
        if let Some(body) = &self.body {
            route.body = body.clone();
        }
        if let Some(token) = &self.bearer_token {
            route.bearer_token = token.clone();
        }
        if let Some(basic) = &self.basic_auth {
            route.basic_auth = basic.clone();
        }
        Ok(())
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn route() -> Route {
        Route {
            id: "1".into(),
            name: "Create item".into(),
            method: "POST".into(),
            url: "/api/items".into(),
            body: Some("{\"a\":1}".into()),
            bearer_token: Some("secret".into()),
            basic_auth: None,
            folder: "root".into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let patch: RoutePatch = serde_json::from_value(serde_json::json!({
            "body": null,
            "basicAuth": "dXNlcjpwYXNz"
        }))
        .unwrap();
        assert_eq!(patch.body, Some(None));
        assert_eq!(patch.bearer_token, None);
        assert_eq!(patch.basic_auth, Some(Some("dXNlcjpwYXNz".into())));

        let mut r = route();
        patch.apply_to(&mut r).unwrap();
        assert_eq!(r.body, None);
        assert_eq!(r.bearer_token.as_deref(), Some("secret"));
        assert_eq!(r.basic_auth.as_deref(), Some("dXNlcjpwYXNz"));
    }

    #[test]
    fn test_null_required_field_keeps_value() {
        let patch: RoutePatch =
            serde_json::from_value(serde_json::json!({ "name": null, "url": "/v2/items" }))
                .unwrap();
        let mut r = route();
        patch.apply_to(&mut r).unwrap();
        assert_eq!(r.name, "Create item");
        assert_eq!(r.url, "/v2/items");
    }

    #[test]
    fn test_blank_name_rejected() {
        let patch = RoutePatch {
            name: Some("  ".into()),
            ..Default::default()
        };
        assert!(patch.apply_to(&mut route()).is_err());
    }

    #[test]
    fn test_folder_alias() {
        let patch: RoutePatch =
            serde_json::from_value(serde_json::json!({ "folder": "billing" })).unwrap();
        assert_eq!(patch.new_folder.as_deref(), Some("billing"));
    }
}
