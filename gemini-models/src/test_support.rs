use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const CLIENT_VARS: [&str; 6] = [
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
    "GENAI_BASE_URL",
    "GEMINI_BASE_URL",
    "GENAI_API_VERSION",
    "GENAI_TIMEOUT",
];

/// 在给定环境变量下执行 `f`。未列出的客户端变量在执行期间被清除。
pub fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut keys: Vec<&str> = CLIENT_VARS.to_vec();
    for (key, _) in vars {
        if !keys.contains(key) {
            keys.push(*key);
        }
    }
    let backup: Vec<(String, Option<String>)> = keys
        .iter()
        .map(|key| ((*key).to_string(), std::env::var(key).ok()))
        .collect();
    for key in &keys {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        if let Some(value) = value {
            std::env::set_var(key, value);
        }
    }
    f();
    for (key, value) in backup {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}
