use std::env;

const DEFAULT_COLLECTION: &str = "comentarios";
const DEFAULT_SUBMIT_GUARD_TIMEOUT_SECS: u64 = 3;
const DEFAULT_CLIENT_ORIGIN_LOOKUP: bool = true;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub project_id: Option<String>,
    pub collection: String,
    pub api_key: Option<String>,
    pub submit_guard_timeout_secs: u64,
    pub client_origin_lookup: bool,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(project_id) = env::var("FIRESTORE_PROJECT_ID") {
            cfg.project_id = Some(project_id);
        }
        if let Ok(collection) = env::var("FIRESTORE_COLLECTION") {
            cfg.collection = collection;
        }
        match env::var("FIRESTORE_API_KEY") {
            Ok(key) => {
                cfg.api_key = Some(key);
            }
            Err(_) => {
                log::warn!("No Firestore API key found");
            }
        }
        if let Ok(secs) = env::var("SUBMIT_GUARD_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => {
                    cfg.submit_guard_timeout_secs = secs;
                }
                Err(_) => {
                    log::warn!("Ignoring invalid SUBMIT_GUARD_TIMEOUT_SECS value: {secs}");
                }
            }
        }
        if let Ok(lookup) = env::var("CLIENT_ORIGIN_LOOKUP").map(|s| s.to_lowercase()) {
            cfg.client_origin_lookup = lookup == "true" || lookup == "1" || lookup == "yes";
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            project_id: None,
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: None,
            submit_guard_timeout_secs: DEFAULT_SUBMIT_GUARD_TIMEOUT_SECS,
            client_origin_lookup: DEFAULT_CLIENT_ORIGIN_LOOKUP,
        }
    }
}
