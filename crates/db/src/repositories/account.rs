//! Account resolution against the chart of accounts.
//!
//! Roles map to fixed account codes. Resolution is lazy: the first event
//! that needs an account creates it with its default name, and concurrent
//! creators race safely through an insert-or-ignore.

use opsledger_core::{AccountRole, LedgerError};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::debug;
use uuid::Uuid;

use crate::entities::accounts;
use crate::repositories::map_db_err;

/// Resolves account roles to chart-of-accounts rows, creating missing
/// accounts on first use.
#[derive(Clone)]
pub struct AccountResolver {
    db: DatabaseConnection,
}

impl AccountResolver {
    /// Creates a resolver over the given connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a role to the id of its account row.
    ///
    /// Creates the account with its default name if it does not exist yet.
    /// An account that exists but has been deactivated is never posted to.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountInactive`] if the account row exists
    /// with `is_active = false`, or [`LedgerError::Database`] on query
    /// failure.
    pub async fn resolve(&self, role: AccountRole) -> Result<Uuid, LedgerError> {
        if let Some(account) = self.find_by_code(role).await? {
            return Self::check_active(&account, role);
        }

        self.insert_ignore(role).await?;

        // The row now exists: either our insert landed or a concurrent
        // creator's did.
        let account = self.find_by_code(role).await?.ok_or_else(|| {
            LedgerError::Database(format!("account {} vanished after insert", role.code()))
        })?;
        Self::check_active(&account, role)
    }

    /// Resolves a role by its string key, as carried in external payloads.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownRole`] for a key outside the role set,
    /// otherwise the same errors as [`Self::resolve`].
    pub async fn resolve_key(&self, key: &str) -> Result<Uuid, LedgerError> {
        let role: AccountRole = key.parse()?;
        self.resolve(role).await
    }

    /// Creates every default account that does not exist yet.
    ///
    /// Existing rows are left untouched, including their `is_active` flag
    /// and any operator-renamed `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Database`] on query failure.
    pub async fn ensure_defaults(&self) -> Result<(), LedgerError> {
        for role in AccountRole::ALL {
            self.insert_ignore(role).await?;
        }
        debug!(count = AccountRole::ALL.len(), "default accounts ensured");
        Ok(())
    }

    async fn find_by_code(&self, role: AccountRole) -> Result<Option<accounts::Model>, LedgerError> {
        accounts::Entity::find()
            .filter(accounts::Column::Code.eq(role.code()))
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn insert_ignore(&self, role: AccountRole) -> Result<(), LedgerError> {
        let model = accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(role.code().to_owned()),
            name: Set(role.default_name().to_owned()),
            account_type: Set(role.account_type().as_str().to_owned()),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now().into()),
        };
        accounts::Entity::insert(model)
            .on_conflict(
                OnConflict::column(accounts::Column::Code)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    fn check_active(account: &accounts::Model, role: AccountRole) -> Result<Uuid, LedgerError> {
        if account.is_active {
            Ok(account.id)
        } else {
            Err(LedgerError::AccountInactive(role.key()))
        }
    }
}
