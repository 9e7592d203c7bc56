//! Canned backend replies used in standalone mode.

use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::entities::Payload;

/// Message carried by the tagged failure for unknown events.
pub const UNRECOGNIZED_EVENT_MESSAGE: &str = "Evento não reconhecido";

const PASSPORT_ID_RANGE: u128 = 1000;

/// Returns the canned reply for a known event, `None` otherwise.
#[must_use]
pub fn canned_response(event: &str, payload: &Payload) -> Option<Value> {
    let reply = match event {
        "getPlayerInfo" => json!({
            "name": "Trig",
            "oab": payload
                .get("oab")
                .filter(|oab| is_truthy(oab))
                .cloned()
                .unwrap_or_else(|| json!("123-456789")),
            "role": "Advogado",
            "level": "SÊNIOR",
            "avatar": "/assets/",
        }),
        "createPassport" => json!({
            "success": true,
            "id": (Uuid::new_v4().as_u128() % PASSPORT_ID_RANGE).to_string(),
        }),
        "approvePassport" | "rejectPassport" | "passportApprove" | "passportReject" | "exit" => {
            json!({ "success": true })
        }
        "getLeis" => json!([
            {
                "id": 1,
                "categoria": "Código Penal",
                "titulo": "Artigo 1 - Furto",
                "conteudo": "Pena: 30 meses de prisão e multa de $5,000",
            },
            {
                "id": 2,
                "categoria": "Código Penal",
                "titulo": "Artigo 2 - Roubo",
                "conteudo": "Pena: 45 meses de prisão e multa de $10,000",
            },
            {
                "id": 3,
                "categoria": "Código Penal",
                "titulo": "Artigo 3 - Assalto a Mão Armada",
                "conteudo": "Pena: 100 meses de prisão e multa de $15,000",
            },
        ]),
        "getPassaportes" => json!([
            {
                "id": "101",
                "nome": "João Silva",
                "identidade": "123.456.789-00",
                "dataNascimento": "1990-05-15",
                "foto": "/assets/",
                "orgao": "Juiz TrigX1",
                "status": "pendente",
            },
            {
                "id": "102",
                "nome": "Maria Oliveira",
                "identidade": "987.654.321-00",
                "dataNascimento": "1985-10-20",
                "foto": "/assets/",
                "orgao": "Juiz TrigX1",
                "status": "aprovado",
            },
        ]),
        _ => return None,
    };

    Some(reply)
}

/// Tagged failure returned for events without a canned reply.
#[must_use]
pub fn unrecognized_event_reply() -> Value {
    json!({ "success": false, "error": UNRECOGNIZED_EVENT_MESSAGE })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("approvePassport" ; "approve")]
    #[test_case("rejectPassport" ; "reject")]
    #[test_case("passportApprove" ; "approve_alias")]
    #[test_case("passportReject" ; "reject_alias")]
    #[test_case("exit" ; "exit")]
    fn test_acknowledgements(event: &str) {
        let mut payload = Payload::new();
        payload.insert("id".to_string(), json!({"not": "an id"}));

        assert_eq!(
            canned_response(event, &payload),
            Some(json!({"success": true}))
        );
    }

    #[test]
    fn test_player_info_echoes_oab() {
        let mut payload = Payload::new();
        payload.insert("oab".to_string(), json!("555-123456"));

        let reply = canned_response("getPlayerInfo", &payload).unwrap();
        assert_eq!(reply["oab"], json!("555-123456"));
        assert_eq!(reply["name"], json!("Trig"));

        payload.insert("oab".to_string(), json!(""));
        let reply = canned_response("getPlayerInfo", &payload).unwrap();
        assert_eq!(reply["oab"], json!("123-456789"));
    }

    #[test]
    fn test_create_passport_id_range() {
        for _ in 0..100 {
            let reply = canned_response("createPassport", &Payload::new()).unwrap();
            assert_eq!(reply["success"], json!(true));

            let id: u32 = reply["id"].as_str().unwrap().parse().unwrap();
            assert!(id < 1000);
        }
    }

    #[test]
    fn test_listings() {
        let laws = canned_response("getLeis", &Payload::new()).unwrap();
        assert_eq!(laws.as_array().map(Vec::len), Some(3));

        let passports = canned_response("getPassaportes", &Payload::new()).unwrap();
        assert_eq!(passports.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_unknown_event() {
        assert!(canned_response("unknownEvent123", &Payload::new()).is_none());
        assert_eq!(
            unrecognized_event_reply(),
            json!({"success": false, "error": "Evento não reconhecido"})
        );
    }
}
