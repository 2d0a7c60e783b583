//! Phone/SMS login, logout, and account deletion.
//!
//! The session is one atomic record: login saves it in a single write,
//! logout/deletion clear it in a single write after the server call
//! succeeds, so a crash can never leave phone and token out of sync.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use bh_core::ports::{ApiError, ContentApiPort, SessionStorePort};
use bh_core::Session;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("请输入正确的手机号")]
    InvalidPhone,

    #[error("请输入验证码")]
    InvalidCode,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("本地会话保存失败")]
    Storage(#[source] anyhow::Error),
}

fn validate_phone(phone: &str) -> Result<(), AuthError> {
    if phone.len() == 11 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AuthError::InvalidPhone)
    }
}

pub struct RequestSmsCode {
    api: Arc<dyn ContentApiPort>,
}

impl RequestSmsCode {
    pub fn new(api: Arc<dyn ContentApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, phone: &str) -> Result<(), AuthError> {
        validate_phone(phone)?;
        self.api.send_code(phone).await?;
        Ok(())
    }
}

pub struct LoginWithCode {
    api: Arc<dyn ContentApiPort>,
    sessions: Arc<dyn SessionStorePort>,
}

impl LoginWithCode {
    pub fn new(api: Arc<dyn ContentApiPort>, sessions: Arc<dyn SessionStorePort>) -> Self {
        Self { api, sessions }
    }

    pub async fn execute(&self, phone: &str, code: &str) -> Result<Session, AuthError> {
        validate_phone(phone)?;
        if code.trim().is_empty() {
            return Err(AuthError::InvalidCode);
        }

        let token = self.api.login(phone, code.trim()).await?;
        let session = Session::new(phone, token);
        self.sessions
            .save(&session)
            .await
            .map_err(AuthError::Storage)?;
        info!(phone = %session.masked_phone(), "login succeeded");
        Ok(session)
    }
}

pub struct Logout {
    api: Arc<dyn ContentApiPort>,
    sessions: Arc<dyn SessionStorePort>,
}

impl Logout {
    pub fn new(api: Arc<dyn ContentApiPort>, sessions: Arc<dyn SessionStorePort>) -> Self {
        Self { api, sessions }
    }

    /// Not being logged in is not an error; the local record is cleared
    /// only after the server accepted the logout.
    pub async fn execute(&self) -> Result<(), AuthError> {
        let Some(session) = self.sessions.load().await.map_err(AuthError::Storage)? else {
            return Ok(());
        };
        self.api.logout(&session.phone, &session.token).await?;
        self.sessions.clear().await.map_err(AuthError::Storage)?;
        info!("logout succeeded");
        Ok(())
    }
}

pub struct DeleteAccount {
    api: Arc<dyn ContentApiPort>,
    sessions: Arc<dyn SessionStorePort>,
}

impl DeleteAccount {
    pub fn new(api: Arc<dyn ContentApiPort>, sessions: Arc<dyn SessionStorePort>) -> Self {
        Self { api, sessions }
    }

    pub async fn execute(&self) -> Result<(), AuthError> {
        let Some(session) = self.sessions.load().await.map_err(AuthError::Storage)? else {
            return Ok(());
        };
        self.api
            .delete_account(&session.phone, &session.token)
            .await?;
        self.sessions.clear().await.map_err(AuthError::Storage)?;
        info!("account deleted");
        Ok(())
    }
}
