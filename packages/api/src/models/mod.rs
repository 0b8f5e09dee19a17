//! Data models exchanged with the backend.
//!
//! Every entity is backend-owned; these are transient client copies. Decoding
//! is deliberately lenient: ids may arrive as JSON numbers or numeric strings,
//! status/role values are matched case-insensitively, and unknown enum values
//! are kept verbatim instead of failing the whole response.

/// Parse an id coming from a form control or route segment.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Serde helpers accepting `3` or `"3"` for integer ids.
pub(crate) mod id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Str(String),
    }

    impl RawId {
        fn into_id<E: serde::de::Error>(self) -> Result<i64, E> {
            match self {
                RawId::Int(id) => Ok(id),
                RawId::Str(s) => super::parse_id(&s)
                    .ok_or_else(|| E::custom(format!("invalid id {s:?}"))),
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        RawId::deserialize(d)?.into_id()
    }

    pub mod option {
        use super::RawId;
        use serde::{Deserialize, Deserializer};

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
            match Option::<RawId>::deserialize(d)? {
                Some(RawId::Str(s)) if s.trim().is_empty() => Ok(None),
                Some(raw) => raw.into_id().map(Some),
                None => Ok(None),
            }
        }
    }
}

/// Declares a string-backed enum that round-trips through its wire value,
/// matches case-insensitively and preserves unknown values in `Other`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $variant, )+
            Other(String),
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The value sent to and received from the backend.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Other(raw) => raw,
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
                match normalized.as_str() {
                    $( $wire => $name::$variant, )+
                    _ => $name::Other(raw.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                $name::from(raw.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod auth;
mod comment;
mod membership;
mod project;
mod task;
mod user;

pub use auth::{LoginCredentials, LoginResponse};
pub use comment::{Comment, CommentUpdate, NewComment};
pub use membership::{Membership, MembershipRole, MembershipUpdate, NewMembership};
pub use project::{Member, NewProject, Project, ProjectStatus, ProjectUpdate};
pub use task::{NewTask, Task, TaskStatus, TaskUpdate};
pub use user::{NewUser, User, UserRole, UserUpdate};
