//! Auth provider holding a fixed, replaceable user id.

use cookbook_core::auth::{AuthProvider, CurrentUser};
use std::sync::{Arc, RwLock};

/// Auth provider whose signed-in user is set directly.
///
/// Stands in for a remote identity service in embedded setups and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthProvider {
    user_id: Arc<RwLock<Option<String>>>,
}

impl StaticAuthProvider {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Arc::new(RwLock::new(Some(user_id.into()))),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        let mut guard = self
            .user_id
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(user_id.into());
    }

    pub fn sign_out(&self) {
        let mut guard = self
            .user_id
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }
}

impl AuthProvider for StaticAuthProvider {
    fn current_user(&self) -> Option<CurrentUser> {
        let guard = self
            .user_id
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.as_ref().map(|id| CurrentUser::new(id.clone()))
    }
}
