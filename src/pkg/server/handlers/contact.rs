use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::{
    conf::settings,
    pkg::{
        internal::email::{contact::ContactTemplate, SendEmail},
        server::{envelope::ApiResponse, handlers::check_required},
    },
    prelude::Result,
};

#[derive(Debug, Deserialize, Validate)]
pub struct ContactInput {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

pub async fn send(Json(input): Json<ContactInput>) -> Result<Json<ApiResponse<()>>> {
    check_required(&input)?;
    ContactTemplate {
        name: &input.name,
        email: &input.email,
        message: &input.message,
    }
    .send(&settings.contact_email)?;
    Ok(Json(ApiResponse::message("Mensaje enviado")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_requires_every_field() {
        let full: ContactInput = serde_json::from_value(serde_json::json!({
            "name": "Pedro",
            "email": "pedro@example.com",
            "message": "Hola"
        }))
        .unwrap();
        assert!(check_required(&full).is_ok());

        for field in ["name", "email", "message"] {
            let mut payload = serde_json::json!({
                "name": "Pedro",
                "email": "pedro@example.com",
                "message": "Hola"
            });
            payload.as_object_mut().unwrap().remove(field);
            let input: ContactInput = serde_json::from_value(payload).unwrap();
            assert!(check_required(&input).is_err(), "{} should be required", field);
        }
    }
}
