//! Users API client.
//!
//! Performs the network IO for the user table and maps the placeholder API shape into
//! [`UserRecord`]s. Callers map the result into state updates.

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use super::record::{UserId, UserRecord};
use crate::http::Client;

/// Shape of one element of the remote users array. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteUser {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Option<RemoteCompany>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteCompany {
    #[serde(default)]
    pub name: String,
}

impl From<RemoteUser> for UserRecord {
    fn from(remote: RemoteUser) -> Self {
        let (first_name, last_name) = split_name(&remote.name);
        Self {
            id: remote.id,
            first_name,
            last_name,
            email: remote.email,
            phone: remote.phone,
            company: remote.company.map(|company| company.name).unwrap_or_default(),
            website: remote.website,
        }
    }
}

/// First space-separated token, then the rest joined back with single spaces.
fn split_name(name: &str) -> (String, String) {
    let mut tokens = name.split(' ');
    let first = tokens.next().unwrap_or_default().to_owned();
    let rest = tokens.collect::<Vec<_>>().join(" ");
    (first, rest)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchUsersError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Users API returned status {0}")]
    Status(u16),
    #[error("Failed to parse users response: {0}")]
    Decode(String),
}

/// GET `url` and decode the users array.
pub async fn fetch_users(url: &str) -> Result<Vec<UserRecord>, FetchUsersError> {
    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|err| FetchUsersError::Transport(err.to_string()))?;

    if !response.is_success() {
        return Err(FetchUsersError::Status(response.status));
    }

    let remote: Vec<RemoteUser> = response.json().map_err(|err| {
        warn!(
            "fetch_users: undecodable {} byte body ({})",
            response.body.len(),
            response.header("content-type").unwrap_or("no content-type"),
        );
        FetchUsersError::Decode(err.to_string())
    })?;

    Ok(remote.into_iter().map(UserRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name() {
        assert_eq!(
            split_name("Leanne Graham"),
            ("Leanne".to_owned(), "Graham".to_owned())
        );
        assert_eq!(
            split_name("Mrs. Dennis Schulist"),
            ("Mrs.".to_owned(), "Dennis Schulist".to_owned())
        );
        assert_eq!(split_name("Cher"), ("Cher".to_owned(), String::new()));
        assert_eq!(split_name(""), (String::new(), String::new()));
    }

    #[test]
    fn test_remote_user_maps_nested_company() {
        let remote: RemoteUser = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": { "city": "Gwenborough" },
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
            }"#,
        )
        .expect("placeholder user should decode");

        let record = UserRecord::from(remote);
        assert_eq!(
            record,
            UserRecord {
                id: 1,
                first_name: "Leanne".to_owned(),
                last_name: "Graham".to_owned(),
                email: "Sincere@april.biz".to_owned(),
                phone: "1-770-736-8031 x56442".to_owned(),
                company: "Romaguera-Crona".to_owned(),
                website: "hildegard.org".to_owned(),
            }
        );
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let remote: RemoteUser =
            serde_json::from_str(r#"{ "id": 4, "name": "Patricia" }"#).expect("sparse user");

        let record = UserRecord::from(remote);
        assert_eq!(record.first_name, "Patricia");
        assert_eq!(record.last_name, "");
        assert_eq!(record.company, "");
        assert_eq!(record.email, "");
    }

    #[test]
    fn test_null_company_becomes_empty() {
        let remote: RemoteUser = serde_json::from_str(
            r#"{ "id": 5, "name": "Chelsey Dietrich", "company": null }"#,
        )
        .expect("null company");

        assert_eq!(UserRecord::from(remote).company, "");
    }
}
