pub mod copy;
mod greeting_vm;
mod indicator_vm;
mod nav_vm;
mod page_vm;
mod time_fmt;

pub use greeting_vm::{GreetingVm, map_greeting};
pub use indicator_vm::{ProgressStepVm, map_progress_steps};
pub use nav_vm::{NavLinkVm, map_nav_links, visited_pages};
pub use page_vm::{restore_events, restored_session};
pub use time_fmt::format_time_away;
