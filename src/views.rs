//! Rendering contexts returned by the workflow handlers.
//!
//! The templating engine is an external collaborator; handlers return the
//! view name plus its model attributes as JSON and the front end resolves
//! the template.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

pub const VIEW_DESCRIPTION_FOR_ADOPTION: &str = "adoption/descriptionForAdoption";
pub const VIEW_LIST_FOR_ADOPTION: &str = "pet/listForAdoption";
pub const VIEW_PET_CREATE: &str = "pet/create";

/// Named view plus its model attributes
#[derive(Debug, Clone, Serialize)]
pub struct ModelAndView {
    pub view: String,
    pub model: Map<String, Value>,
}

impl ModelAndView {
    pub fn new(view: &str) -> Self {
        Self {
            view: view.to_string(),
            model: Map::new(),
        }
    }

    /// Add a model attribute; serialization failures surface as a null
    /// attribute rather than a failed response.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.model.insert(key.to_string(), value);
        self
    }
}

impl IntoResponse for ModelAndView {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
