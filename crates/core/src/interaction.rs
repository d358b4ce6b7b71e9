//! Per-page unlock state machine.
//!
//! Each page load gets a `PageSession`. UI events are fed in with
//! `PageSession::record`; `PageSession::request_advance` tells whether the
//! page's guard is satisfied and, if not, which notice to show.

use crate::model::{ConversationTopic, FinalDecision, GrowthValue, MemoryId, PageId, Reaction};

/// Notice shown when a visitor follows a link to a page that is still locked.
pub const LOCKED_PAGE_NOTICE: &str =
    "Hey! This page is still locked. Finish the earlier steps first, okay?";

/// Discrete UI events the pages emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageInteraction {
    CuriousChosen,
    SkepticalChosen,
    RevealOpened,
    MemoryFlipped(MemoryId),
    ReactionSelected(Reaction),
    /// `None` is the empty placeholder option of the topic select.
    TopicSelected(Option<ConversationTopic>),
    GrowthSelected(GrowthValue),
    ReadyNow,
    FinalChoice(FinalDecision),
}

/// Named transition guard of each page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockGuard {
    CuriousChosen,
    RevealOpened,
    MemoryFlippedAndReacted,
    TopicAndGrowthChosen,
    FinalChoiceMade,
}

impl UnlockGuard {
    #[must_use]
    pub const fn for_page(page: PageId) -> Self {
        match page {
            PageId::Index => UnlockGuard::CuriousChosen,
            PageId::Journey => UnlockGuard::RevealOpened,
            PageId::Memories => UnlockGuard::MemoryFlippedAndReacted,
            PageId::Future => UnlockGuard::TopicAndGrowthChosen,
            PageId::Connect => UnlockGuard::FinalChoiceMade,
        }
    }

    /// What the visitor is told when they try to move on too early.
    #[must_use]
    pub const fn rejection_notice(self) -> &'static str {
        match self {
            UnlockGuard::CuriousChosen => {
                "Wait! I know you're curious, but the journey has to start first. Press \"I'm curious...\" and let's go!"
            }
            UnlockGuard::RevealOpened => {
                "Oops, you skipped something important! Press \"Who is this?\" first to find out who you're talking to."
            }
            UnlockGuard::MemoryFlippedAndReacted => {
                "Hold on! Two things left: flip a memory card and tell me how it makes you feel. Then we can move on."
            }
            UnlockGuard::TopicAndGrowthChosen => {
                "Hey friend! I'd love to know which topic interests you and what helps you grow. Please choose both before continuing."
            }
            UnlockGuard::FinalChoiceMade => "Pick one of the two answers below.",
        }
    }
}

/// A forward navigation attempt that the current page refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub guard: UnlockGuard,
    pub notice: &'static str,
}

impl Rejection {
    #[must_use]
    pub const fn new(guard: UnlockGuard) -> Self {
        Self {
            guard,
            notice: guard.rejection_notice(),
        }
    }
}

/// What recording an event did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The event counted towards the guard.
    Accepted,
    /// The event belongs to this page but is refused with a notice.
    Rejected(Rejection),
    /// The event does not belong to this page.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Stage {
    Index {
        curious: bool,
    },
    Journey {
        revealed: bool,
    },
    Memories {
        flipped: bool,
        reacted: bool,
    },
    Future {
        topic: bool,
        growth: bool,
        ready_now: bool,
    },
    Connect {
        decision: Option<FinalDecision>,
    },
}

impl Stage {
    fn initial(page: PageId) -> Self {
        match page {
            PageId::Index => Stage::Index { curious: false },
            PageId::Journey => Stage::Journey { revealed: false },
            PageId::Memories => Stage::Memories {
                flipped: false,
                reacted: false,
            },
            PageId::Future => Stage::Future {
                topic: false,
                growth: false,
                ready_now: false,
            },
            PageId::Connect => Stage::Connect { decision: None },
        }
    }
}

/// Interaction state of the page currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSession {
    page: PageId,
    stage: Stage,
}

impl PageSession {
    #[must_use]
    pub fn new(page: PageId) -> Self {
        Self {
            page,
            stage: Stage::initial(page),
        }
    }

    #[must_use]
    pub fn page(&self) -> PageId {
        self.page
    }

    #[must_use]
    pub fn guard(&self) -> UnlockGuard {
        UnlockGuard::for_page(self.page)
    }

    /// Feed one UI event into the page's state machine.
    pub fn record(&mut self, event: &PageInteraction) -> InteractionOutcome {
        match (&mut self.stage, event) {
            (Stage::Index { curious }, PageInteraction::CuriousChosen) => {
                *curious = true;
                InteractionOutcome::Accepted
            }
            (Stage::Index { .. }, PageInteraction::SkepticalChosen) => {
                InteractionOutcome::Rejected(Rejection::new(UnlockGuard::CuriousChosen))
            }
            (Stage::Journey { revealed }, PageInteraction::RevealOpened) => {
                *revealed = true;
                InteractionOutcome::Accepted
            }
            (Stage::Memories { flipped, .. }, PageInteraction::MemoryFlipped(_)) => {
                *flipped = true;
                InteractionOutcome::Accepted
            }
            (Stage::Memories { reacted, .. }, PageInteraction::ReactionSelected(_)) => {
                *reacted = true;
                InteractionOutcome::Accepted
            }
            (Stage::Future { topic, .. }, PageInteraction::TopicSelected(choice)) => {
                if choice.is_none() {
                    return InteractionOutcome::Ignored;
                }
                *topic = true;
                InteractionOutcome::Accepted
            }
            (Stage::Future { growth, .. }, PageInteraction::GrowthSelected(_)) => {
                *growth = true;
                InteractionOutcome::Accepted
            }
            (Stage::Future { ready_now, .. }, PageInteraction::ReadyNow) => {
                *ready_now = true;
                InteractionOutcome::Accepted
            }
            (Stage::Connect { decision }, PageInteraction::FinalChoice(choice)) => {
                *decision = Some(*choice);
                InteractionOutcome::Accepted
            }
            _ => InteractionOutcome::Ignored,
        }
    }

    /// True once the page's guard is satisfied.
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        match &self.stage {
            Stage::Index { curious } => *curious,
            Stage::Journey { revealed } => *revealed,
            Stage::Memories { flipped, reacted } => *flipped && *reacted,
            Stage::Future {
                topic,
                growth,
                ready_now,
            } => *ready_now || (*topic && *growth),
            Stage::Connect { decision } => decision.is_some(),
        }
    }

    /// Ask to move forward.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` to show when the guard is not yet satisfied.
    pub fn request_advance(&self) -> Result<(), Rejection> {
        if self.is_unlocked() {
            Ok(())
        } else {
            Err(Rejection::new(self.guard()))
        }
    }

    /// The closing choice made on the terminal page, if any.
    #[must_use]
    pub fn final_decision(&self) -> Option<FinalDecision> {
        match &self.stage {
            Stage::Connect { decision } => *decision,
            _ => None,
        }
    }
}
