//! SkillHub Types - Core types for the SkillHub marketplace client
//!
//! These are read projections of backend state. The client decodes them from
//! JSON responses and hands them to callers unmodified.

use serde::{Deserialize, Deserializer};

pub mod favorite;
pub mod page;
pub mod skill;
pub mod user;

pub use favorite::Favorite;
pub use page::PaginatedResponse;
pub use skill::{DownloadLink, Skill, SkillQuery};
pub use user::{AuthResponse, User};

/// Decode a JSON `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
