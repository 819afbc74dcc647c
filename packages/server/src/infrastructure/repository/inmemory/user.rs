//! InMemory User Repository 実装
//!
//! ユーザーの目標だけを保持する簡易ディレクトリ。起動時に JSON ファイルから読み込める。

use std::{collections::HashMap, path::Path};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::{Goal, User, UserId, UserRepository, ValueObjectError};

/// ユーザーファイルの 1 レコード
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: String,
    #[serde(default)]
    goal: Option<String>,
}

/// ユーザーファイル読み込みのエラー
#[derive(Debug, thiserror::Error)]
pub enum UserLoadError {
    #[error("failed to read users file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse users file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid user record: {0}")]
    Invalid(#[from] ValueObjectError),
}

/// インメモリ User Repository 実装
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// `[{"id": "...", "goal": "weight loss"}]` 形式の JSON からユーザーを読み込む
    pub fn from_json(json: &str) -> Result<Self, UserLoadError> {
        let records: Vec<UserRecord> = serde_json::from_str(json)?;
        let users = records
            .into_iter()
            .map(|record| {
                let goal = record.goal.as_deref().map(Goal::try_from).transpose()?;
                Ok(User {
                    id: UserId::new(record.id)?,
                    goal,
                })
            })
            .collect::<Result<Vec<_>, ValueObjectError>>()?;
        Ok(Self::with_users(users))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, UserLoadError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    pub async fn upsert(&self, user: User) {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user);
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> Option<User> {
        let users = self.users.read().await;
        users.get(user_id).cloned()
    }
}
