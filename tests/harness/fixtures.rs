use serde_json::json;

use conndeck::domain::{Connection, ConnectionConfig, ConnectionType};

pub fn types() -> Vec<ConnectionType> {
    ["github", "jira", "filesystem", "code_index"]
        .into_iter()
        .map(ConnectionType::new)
        .collect()
}

pub fn github_repo() -> Connection {
    let mut config = ConnectionConfig::new();
    config.insert("token".to_string(), json!("ghp_test"));
    config.insert("repo".to_string(), json!("acme/api"));
    Connection::new("conn-1", "Repo A", "github", config)
}

pub fn code_index() -> Connection {
    let mut config = ConnectionConfig::new();
    config.insert("paths".to_string(), json!(["/srv/monorepo"]));
    Connection::new("conn-2", "Monorepo", "code_index", config)
}
