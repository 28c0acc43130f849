use duel_engine::api::{simulate_battle, simulate_battle_many, BattleConfig};
use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use serde_json::json;

const DEFAULT_SAMPLES: u64 = 100;

fn err(env: &JNIEnv, e: impl std::fmt::Display) -> jstring {
    respond(env, json!({ "ok": false, "error": e.to_string() }))
}

fn respond(env: &JNIEnv, payload: serde_json::Value) -> jstring {
    match env.new_string(payload.to_string()) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Runs one battle from a JSON config and returns the JSON envelope.
pub fn battle_json(input: &str) -> serde_json::Value {
    let cfg: BattleConfig = match serde_json::from_str(input) {
        Ok(c) => c,
        Err(e) => return json!({ "ok": false, "error": format!("invalid_config: {}", e) }),
    };
    match simulate_battle(&cfg).and_then(|r| Ok(serde_json::to_value(r)?)) {
        Ok(result) => json!({ "ok": true, "result": result }),
        Err(e) => json!({ "ok": false, "error": e.to_string() }),
    }
}

/// Like [`battle_json`] but reads an extra `samples` key (default 100) and
/// returns the aggregated summary.
pub fn battle_many_json(input: &str) -> serde_json::Value {
    let mut root: serde_json::Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return json!({ "ok": false, "error": format!("invalid_config: {}", e) }),
    };
    let samples = root
        .get("samples")
        .and_then(|v| v.as_u64())
        .unwrap_or(DEFAULT_SAMPLES)
        .min(u32::MAX as u64) as u32;
    if let Some(obj) = root.as_object_mut() {
        obj.remove("samples");
    }
    let cfg: BattleConfig = match serde_json::from_value(root) {
        Ok(c) => c,
        Err(e) => return json!({ "ok": false, "error": format!("invalid_config: {}", e) }),
    };
    match simulate_battle_many(&cfg, samples).and_then(|s| Ok(serde_json::to_value(s)?)) {
        Ok(result) => json!({ "ok": true, "result": result }),
        Err(e) => json!({ "ok": false, "error": e.to_string() }),
    }
}

#[no_mangle]
pub extern "system" fn Java_com_duelsim_Ffi_version<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jstring {
    env.new_string(concat!("duel-ffi ", env!("CARGO_PKG_VERSION")))
        .map(|s| s.into_raw())
        .unwrap_or(std::ptr::null_mut())
}

#[no_mangle]
pub extern "system" fn Java_com_duelsim_Ffi_simulateBattleJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let input: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(e) => return err(&env, e),
    };
    respond(&env, battle_json(&input))
}

#[no_mangle]
pub extern "system" fn Java_com_duelsim_Ffi_simulateBattleManyJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let input: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(e) => return err(&env, e),
    };
    respond(&env, battle_many_json(&input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battle_envelope_carries_report() {
        let out = battle_json(r#"{ "seed": 2025 }"#);
        assert_eq!(out["ok"], true);
        assert!(out["result"]["rounds"].as_u64().unwrap() > 0);
    }

    #[test]
    fn battle_envelope_is_not_double_wrapped() {
        let out = battle_json(r#"{ "seed": 5 }"#);
        assert!(out["result"].get("ok").is_none());
        assert!(out["result"]["winner"].is_string());
    }

    #[test]
    fn bad_config_is_reported_not_panicked() {
        let out = battle_json("{ not json");
        assert_eq!(out["ok"], false);
        assert!(out["error"].as_str().unwrap().starts_with("invalid_config"));
    }

    #[test]
    fn many_reads_samples_key() {
        let out = battle_many_json(r#"{ "seed": 1, "samples": 12 }"#);
        assert_eq!(out["ok"], true);
        assert_eq!(out["result"]["samples"], 12);
    }

    #[test]
    fn unknown_armory_error_text_survives() {
        let out = battle_json(r#"{ "weapons_id": "nope" }"#);
        assert_eq!(out["ok"], false);
        assert!(out["error"].as_str().unwrap().contains("nope"));
    }
}
