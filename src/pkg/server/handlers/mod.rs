use serde::Deserialize;
use validator::Validate;

use crate::prelude::{AppError, Result};

pub mod auth;
pub mod contact;
pub mod empresas;
pub mod eventos;
pub mod formaciones;
pub mod lookups;
pub mod notifications;
pub mod probes;
pub mod profile;
pub mod trabajos;
pub mod users;

pub const REQUIRED_FIELDS_MSG: &str = "Todos los campos son obligatorios";

/// Save endpoints take one payload for both cases: a positive id means the
/// caller is editing an existing row, anything else means a new one.
#[derive(Debug, PartialEq)]
pub enum WriteAction {
    Insert,
    Update(i32),
}

impl WriteAction {
    pub fn for_id(id: i32) -> Self {
        if id > 0 {
            WriteAction::Update(id)
        } else {
            WriteAction::Insert
        }
    }
}

pub fn check_required<T: Validate>(input: &T) -> Result<()> {
    input
        .validate()
        .map_err(|_| AppError::Validation(REQUIRED_FIELDS_MSG.into()))
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<i32>,
}

pub fn require_delete_id(params: &DeleteParams) -> Result<i32> {
    params
        .id
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::MissingParam("Falta el identificador".into()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_write_action_branches_on_positive_id() {
        assert_eq!(WriteAction::for_id(0), WriteAction::Insert);
        assert_eq!(WriteAction::for_id(-3), WriteAction::Insert);
        assert_eq!(WriteAction::for_id(i32::MIN), WriteAction::Insert);
        assert_eq!(WriteAction::for_id(1), WriteAction::Update(1));
        assert_eq!(WriteAction::for_id(42), WriteAction::Update(42));
        assert_eq!(WriteAction::for_id(i32::MAX), WriteAction::Update(i32::MAX));
    }

    #[test]
    fn test_delete_requires_id() {
        let missing = require_delete_id(&DeleteParams { id: None }).unwrap_err();
        assert_eq!(missing.status(), StatusCode::FORBIDDEN);

        let zero = require_delete_id(&DeleteParams { id: Some(0) }).unwrap_err();
        assert_eq!(zero.status(), StatusCode::FORBIDDEN);

        assert_eq!(require_delete_id(&DeleteParams { id: Some(7) }).unwrap(), 7);
    }
}
