//! Wire shapes of backend requests and replies.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Passport, PassportStatus};
use crate::domain::serde_utils::string_or_number;

/// `getPlayerInfo` request.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerInfoRequest<'a> {
    /// Registration number of the player.
    pub oab: &'a str,
}

/// `registerOab` request.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterOabRequest<'a> {
    /// Display name chosen by the user.
    pub name: &'a str,
    /// Locally generated registration number.
    pub oab: &'a str,
}

/// `updateProfile` request.
#[derive(Debug, Clone, Serialize)]
#[allow(missing_docs)]
pub struct UpdateProfileRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub oab: &'a str,
}

/// `createPassport` request.
#[derive(Debug, Clone, Serialize)]
#[allow(missing_docs)]
pub struct CreatePassportRequest<'a> {
    #[serde(rename = "nome")]
    pub name: &'a str,
    #[serde(rename = "identidade")]
    pub identity: &'a str,
    #[serde(rename = "dataNascimento")]
    pub birthdate: &'a str,
    #[serde(rename = "foto")]
    pub photo: &'a str,
}

/// `approvePassport` / `rejectPassport` request.
#[derive(Debug, Clone, Serialize)]
pub struct PassportDecisionRequest<'a> {
    /// Passport identifier.
    pub id: &'a str,
}

/// `createPassport` reply.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePassportResponse {
    /// Identifier minted by the backend.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
}

/// Passport as listed by `getPassaportes`.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct PassportRecord {
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "identidade", default)]
    pub identity: String,
    #[serde(rename = "dataNascimento", default)]
    pub birthdate: String,
    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
    #[serde(rename = "orgao", default)]
    pub issuer: Option<String>,
    pub status: PassportStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl From<PassportRecord> for Passport {
    fn from(record: PassportRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            identity: record.identity,
            birthdate: record.birthdate,
            issuer: record.issuer,
            photo: record.photo,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passport_record_from_wire() {
        let record: PassportRecord = serde_json::from_str(
            r#"{
                "id": 101,
                "nome": "João Silva",
                "identidade": "123.456.789-00",
                "dataNascimento": "1990-05-15",
                "foto": "/assets/",
                "orgao": "Juiz TrigX1",
                "status": "pendente"
            }"#,
        )
        .unwrap();

        let passport = Passport::from(record);
        assert_eq!(passport.id, "101");
        assert_eq!(passport.issuer.as_deref(), Some("Juiz TrigX1"));
        assert!(passport.status.is_pending());
        assert!(passport.created_at.is_none());
    }

    #[test]
    fn test_create_passport_request_wire_names() {
        let value = serde_json::to_value(CreatePassportRequest {
            name: "Ana",
            identity: "111.222.333-44",
            birthdate: "1992-03-01",
            photo: "data:image/png;base64,AAAA",
        })
        .unwrap();

        assert_eq!(value["nome"], "Ana");
        assert_eq!(value["identidade"], "111.222.333-44");
        assert_eq!(value["dataNascimento"], "1992-03-01");
        assert_eq!(value["foto"], "data:image/png;base64,AAAA");
    }
}
