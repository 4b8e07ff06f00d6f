use crate::domain::model::UserRecord;
use crate::utils::error::Result;

/// Origin-scoped key-value persistence for user records.
///
/// Keys are raw usernames. `get` reports a stored value that does not decode
/// as [`crate::utils::error::AppError::MalformedRecord`].
pub trait Store {
    fn has(&self, key: &str) -> Result<bool>;
    fn get(&self, key: &str) -> Result<Option<UserRecord>>;
    fn put(&mut self, key: &str, record: &UserRecord) -> Result<()>;
}

pub trait ConfigProvider {
    fn store_dir(&self) -> &str;
    fn origin(&self) -> &str;
}
