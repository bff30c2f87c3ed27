//! Collaborator layer
//!
//! The engine never draws anything and never talks to an event bus
//! directly. It reaches both through traits:
//!
//! - **`ResultRenderer`** - draws the input and result list, toggles the
//!   current-row marker and scrolls rows into view
//! - **`SelectionPublisher`** - receives one `SelectionEvent` per committed
//!   selection or deselection
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        TypeaheadSession                 │
//! │  (search cache, navigation, selection)  │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  ResultRenderer / SelectionPublisher    │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Host adapters │  │ Bundled           │
//! │ (terminal,    │  │ - HeadlessRenderer│
//! │  web, GUI)    │  │ - NullRenderer    │
//! │               │  │ - EventLog        │
//! └───────────────┘  └───────────────────┘
//! ```

mod headless;
mod output;
mod traits;
mod types;

pub use headless::{HeadlessRenderer, NullRenderer, ViewSnapshot};
pub use output::EventLog;
pub use traits::{ResultRenderer, ResultsView, SelectionPublisher};
pub use types::{InstanceId, SelectionEvent};
