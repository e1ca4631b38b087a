//! Model-View-Intent (MVI) primitives shared by every feature module.
//!
//! ```text
//! key / HTTP settlement ──→ Intent ──→ Reducer ──→ State ──→ draw()
//!          ↑                                                  │
//!          └──────────────────────────────────────────────────┘
//! ```
//!
//! Reducers never touch the network. The `App` inspects the state a reducer
//! returns and issues the matching fetch command itself.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
