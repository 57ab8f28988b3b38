use proptest::prelude::*;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use chainwallet_rest::{RawResponse, RestError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Receipt {
    id: String,
    amount: i64,
    transaction_ids: Vec<String>,
}

fn envelope_with(code: i32, message: &str, payload: serde_json::Value) -> RawResponse {
    let body = serde_json::json!({ "err_code": code, "err_message": message, "payload": payload });
    RawResponse::new(StatusCode::OK, serde_json::to_vec(&body).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn nested_payload_round_trips(
        id in "[a-zA-Z0-9:_-]{0,40}",
        amount in any::<i64>(),
        transaction_ids in prop::collection::vec("[a-f0-9]{8,64}", 0..5),
    ) {
        let original = Receipt { id, amount, transaction_ids };
        let nested = serde_json::to_string(&original).unwrap();
        let resp = envelope_with(0, "", serde_json::Value::String(nested));

        let decoded: Receipt = resp.decode().unwrap();
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn non_success_code_always_yields_remote_error(
        code in any::<i32>().prop_filter("non-success", |c| *c != 0),
        message in ".{0,40}",
        with_payload in any::<bool>(),
    ) {
        let payload = if with_payload {
            serde_json::Value::String(r#"{"id":"x","amount":1,"transaction_ids":[]}"#.to_string())
        } else {
            serde_json::Value::Null
        };
        let resp = envelope_with(code, &message, payload);

        match resp.decode::<Receipt>() {
            Err(RestError::Remote { code: c, message: m }) => {
                prop_assert_eq!(c, code);
                prop_assert_eq!(m, message);
            }
            other => prop_assert!(false, "expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn non_string_payload_never_decodes(n in any::<i64>(), flag in any::<bool>()) {
        for payload in [serde_json::json!(n), serde_json::json!(flag), serde_json::json!({"id": n})] {
            let resp = envelope_with(0, "", payload);
            prop_assert!(matches!(resp.decode::<Receipt>(), Err(RestError::PayloadType(_))));
        }
    }
}
