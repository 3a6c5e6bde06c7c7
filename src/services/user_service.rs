use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    dao::UserDao,
    dto::users::{RegisterRequest, UpdateUserRequest},
    error::{AppError, AppResult},
    models::{ROLE_USER, User},
};

#[derive(Clone)]
pub struct UserService {
    dao: UserDao,
}

impl UserService {
    pub fn new(dao: UserDao) -> Self {
        Self { dao }
    }

    pub async fn get_users(&self) -> AppResult<Vec<User>> {
        self.dao.find_all().await
    }

    pub async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.dao.find_by_id(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.dao.find_by_username(username).await
    }

    pub async fn check_user_exists(&self, username: &str) -> AppResult<bool> {
        self.dao.exists_by_username(username).await
    }

    /// Registers a customer account.
    pub async fn add_user(&self, payload: RegisterRequest) -> AppResult<User> {
        self.add_user_with_role(payload, ROLE_USER).await
    }

    pub async fn add_user_with_role(&self, payload: RegisterRequest, role: &str) -> AppResult<User> {
        let RegisterRequest {
            username,
            password,
            email,
            address,
        } = payload;
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::BadRequest("username must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::BadRequest("password must not be empty".to_string()));
        }

        if self.dao.exists_by_username(&username).await? {
            tracing::warn!(username = %username, "registration rejected: username taken");
            return Err(AppError::DuplicateUser(username));
        }

        let user = User {
            id: Uuid::new_v4(),
            password_hash: hash_password(&password)?,
            username,
            email,
            address,
            role: role.to_string(),
            created_at: Utc::now(),
        };

        let user = self
            .dao
            .upsert(&user)
            .await
            .map_err(|err| duplicate_user_or(err, &user.username))?;
        tracing::info!(user_id = %user.id, role = %user.role, "user registered");
        Ok(user)
    }

    /// Returns the user when `password` matches the stored hash.
    pub async fn check_login(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let username = username.trim();
        let Some(user) = self.dao.find_by_username(username).await? else {
            return Ok(None);
        };
        if verify_password(password, &user.password_hash)? {
            tracing::info!(user_id = %user.id, "login succeeded");
            Ok(Some(user))
        } else {
            tracing::warn!(username, "login rejected: password mismatch");
            Ok(None)
        }
    }

    pub async fn update_user(&self, id: Uuid, payload: UpdateUserRequest) -> AppResult<User> {
        let mut user = self.dao.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if let Some(username) = payload.username {
            let username = username.trim().to_string();
            if username.is_empty() {
                return Err(AppError::BadRequest("username must not be empty".to_string()));
            }
            if username != user.username {
                if self.dao.exists_by_username(&username).await? {
                    return Err(AppError::DuplicateUser(username));
                }
                user.username = username;
            }
        }
        if let Some(password) = payload.password {
            if password.is_empty() {
                return Err(AppError::BadRequest("password must not be empty".to_string()));
            }
            user.password_hash = hash_password(&password)?;
        }
        if let Some(email) = payload.email {
            user.email = email;
        }
        if let Some(address) = payload.address {
            user.address = address;
        }

        let user = self
            .dao
            .upsert(&user)
            .await
            .map_err(|err| duplicate_user_or(err, &user.username))?;
        tracing::info!(user_id = %user.id, "user updated");
        Ok(user)
    }

    pub async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.dao.delete(id).await?;
        if deleted {
            tracing::info!(user_id = %id, "user deleted");
        }
        Ok(deleted)
    }
}

/// A unique violation here can only come from the username column.
fn duplicate_user_or(err: AppError, username: &str) -> AppError {
    match err {
        AppError::Storage(ref db) if AppError::is_unique_violation(db) => {
            AppError::DuplicateUser(username.to_string())
        }
        other => other,
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies_only_the_plaintext_it_came_from() {
        let hash = hash_password("s3cret").unwrap();
        assert_ne!(hash, "s3cret");
        assert!(verify_password("s3cret", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn each_hash_uses_a_fresh_salt() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        assert!(matches!(
            verify_password("x", "not-a-hash"),
            Err(AppError::Internal(_))
        ));
    }
}
