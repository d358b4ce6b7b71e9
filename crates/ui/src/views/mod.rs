mod connect;
mod frame;
mod future;
mod index;
mod journey;
mod memories;
mod progress;
mod shell;
mod state;

pub use connect::ConnectView;
pub use frame::{NavState, SiteFrame};
pub use future::FutureView;
pub use index::IndexView;
pub use journey::JourneyView;
pub use memories::MemoriesView;
pub use progress::ProgressIndicator;
pub use shell::{
    ContinueButton, GateData, NoticeBanner, PageController, PageGate, use_page_controller,
};
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
