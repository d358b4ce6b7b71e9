use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing a choice value from its wire name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {raw}")]
pub struct ParseChoiceError {
    kind: &'static str,
    raw: String,
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $variant:ident => $wire:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ParseChoiceError {
                        kind: $kind,
                        raw: other.to_string(),
                    }),
                }
            }
        }
    };
}

choice_enum! {
    /// How the visitor reacted to the memories page.
    Reaction, "reaction" {
        Intrigued => "intrigued", "Intrigued",
        Confused => "confused", "A bit confused",
        Concerned => "concerned", "Concerned",
    }
}

choice_enum! {
    /// Conversation topic picked on the future page.
    ConversationTopic, "conversation topic" {
        Books => "books", "Books",
        Travel => "travel", "Travel",
        Philosophy => "philosophy", "Philosophy",
        Dreams => "dreams", "Dreams",
    }
}

choice_enum! {
    /// What the visitor values most for growth.
    GrowthValue, "growth value" {
        Challenges => "challenges", "Facing challenges",
        Learning => "learning", "Learning",
        Connection => "connection", "Connection",
    }
}

choice_enum! {
    /// The two closing choices on the terminal page.
    FinalDecision, "final decision" {
        Connect => "connect", "Yes, let's talk",
        MaybeLater => "maybe", "Maybe later",
    }
}

impl FinalDecision {
    /// Only the affirmative choice completes the experience.
    #[must_use]
    pub const fn completes_experience(self) -> bool {
        matches!(self, FinalDecision::Connect)
    }
}

/// Identifier of a memory card on the memories page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryId(String);

impl MemoryId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
