use serde::{Deserialize, Serialize};

/// `GET /multicloud/common/username`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsernameResponse {
    pub username: String,
}

/// `GET /multicloud/common/version`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

/// `GET /multicloud/common/configure`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigureResponse {
    pub token_endpoint: String,
}

/// `GET /multicloud/logout`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub admin: bool,
    pub logout_path: String,
}

/// Public console configmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolePublicResponse {
    pub data: ConsolePublicData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolePublicData {
    #[serde(rename = "consoleURL")]
    pub console_url: String,
}

/// A value loaded from the console API, holding its fallback until then.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteValue<T> {
    pub value: T,
    pub loaded: bool,
}

impl<T> RemoteValue<T> {
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            loaded: false,
        }
    }

    pub fn loaded(value: T) -> Self {
        Self {
            value,
            loaded: true,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteValue<U> {
        RemoteValue {
            value: f(self.value),
            loaded: self.loaded,
        }
    }
}
