//! Keyboard navigation over the result list
//!
//! The result list is either closed or open; while open it may have a
//! current (highlighted) row. Directional input moves the current row and
//! wraps around at both ends.
//!
//! ```text
//!            set_results(open = true)
//!   Closed ───────────────────────────► OpenNoSelection
//!     ▲                                     │ Next / Previous
//!     │ close / confirm                     ▼
//!     └───────────────────────────────── OpenSelection(i) ◄─┐
//!                                           │ Next / Prev   │
//!                                           └───────────────┘
//! ```

mod state;

pub use state::{Direction, IndexChange, NavPhase, NavigationState};
