//! Factory for user records.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    OnceLock,
};

use chrono::Utc;
use rand::Rng;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use tracing::debug;

use crate::{
    data::user::UserRepository,
    factory::fake,
    model::{db::UserModel, user::NewUser},
    util::password,
};

/// Plaintext password behind every factory-generated password hash.
pub const DEFAULT_PASSWORD: &str = "password";

const REMEMBER_TOKEN_LEN: usize = 10;
const EMAIL_NONCE_LEN: usize = 8;

static EMAILS: OnceLock<EmailSequence> = OnceLock::new();
static DEFAULT_PASSWORD_HASH: OnceLock<String> = OnceLock::new();

/// Source of unique email suffixes.
///
/// The suffix is `<nonce>.<n>`: `n` counts up within the sequence and the nonce
/// separates sequences, so earlier processes writing to the same database
/// never produce the same email.
pub(crate) struct EmailSequence {
    nonce: String,
    next: AtomicU64,
}

impl EmailSequence {
    pub(crate) fn new(nonce: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
            next: AtomicU64::new(1),
        }
    }

    fn random() -> Self {
        Self::new(fake::alphanumeric(&mut rand::rng(), EMAIL_NONCE_LEN).to_lowercase())
    }

    /// The sequence shared by every factory in this process.
    fn global() -> &'static Self {
        EMAILS.get_or_init(Self::random)
    }

    fn next_suffix(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}.{}", self.nonce, n)
    }
}

type State = Box<dyn Fn(&mut NewUser) + Send + Sync>;

/// Builds users with plausible default values.
///
/// ```ignore
/// let users = UserFactory::new().count(5).create(&db).await?;
/// let pending = UserFactory::new().unverified().make();
/// ```
pub struct UserFactory {
    count: usize,
    states: Vec<State>,
}

impl UserFactory {
    /// Creates a factory producing a single verified user.
    pub fn new() -> Self {
        Self {
            count: 1,
            states: Vec::new(),
        }
    }

    /// Sets how many users `make` and `create` produce.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Marks generated users as not having verified their email.
    pub fn unverified(self) -> Self {
        self.state(|user| user.email_verified_at = None)
    }

    /// Applies `state` to every generated user, after the defaults and any earlier states.
    pub fn state<F>(mut self, state: F) -> Self
    where
        F: Fn(&mut NewUser) + Send + Sync + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Default field values for one user.
    fn definition<R: Rng + ?Sized>(rng: &mut R, emails: &EmailSequence) -> NewUser {
        let first = fake::first_name(rng);
        let last = fake::last_name(rng);
        let suffix = emails.next_suffix();

        NewUser {
            name: format!("{} {}", first, last),
            email: fake::safe_email(rng, first, last, &suffix),
            email_verified_at: Some(Utc::now().naive_utc()),
            password: DEFAULT_PASSWORD_HASH
                .get_or_init(|| password::hash(DEFAULT_PASSWORD))
                .clone(),
            remember_token: Some(fake::alphanumeric(rng, REMEMBER_TOKEN_LEN)),
        }
    }

    /// Builds the configured number of users without touching the database.
    pub fn make(&self) -> Vec<NewUser> {
        self.make_with(&mut rand::rng(), EmailSequence::global())
    }

    pub(crate) fn make_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        emails: &EmailSequence,
    ) -> Vec<NewUser> {
        (0..self.count)
            .map(|_| {
                let mut user = Self::definition(rng, emails);
                for state in &self.states {
                    state(&mut user);
                }
                user
            })
            .collect()
    }

    /// Builds and persists the configured number of users in a single transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<UserModel>)` - The inserted users, empty when the count is zero
    /// - `Err(DbErr)` - An insert failed; no users from this call are kept
    pub async fn create(&self, db: &DatabaseConnection) -> Result<Vec<UserModel>, DbErr> {
        if self.count == 0 {
            return Ok(Vec::new());
        }

        let txn = db.begin().await?;
        let users = UserRepository::new(&txn).create_many(self.make()).await?;
        txn.commit().await?;

        debug!("Created {} users from factory", users.len());

        Ok(users)
    }

    /// Builds and persists exactly one user, ignoring the configured count.
    pub async fn create_one(self, db: &DatabaseConnection) -> Result<UserModel, DbErr> {
        self.count(1)
            .create(db)
            .await?
            .into_iter()
            .next()
            .ok_or(DbErr::RecordNotInserted)
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}
