mod choices;
mod journal;
mod page;
mod prerequisites;
mod progression;

pub use choices::{
    ConversationTopic, FinalDecision, GrowthValue, MemoryId, ParseChoiceError, Reaction,
};
pub use journal::{JournalChoices, TimeSinceVisit, VisitorJournal};
pub use page::{PageCatalog, PageDefinition, PageId, ParsePageIdError};
pub use prerequisites::PrerequisiteMap;
pub use progression::ProgressionState;
