//! Policy checks.
//!
//! Each check is an independent consumer of the shared analytical core:
//! the resolver, binding classifier, access-shape matcher, and context
//! frames do the work once per file; the checks only decide whether a
//! classified site is a violation and what rewrite, if any, to offer.

mod no_mutation_in_computed;
mod no_peek_in_render;
mod no_signal_destructuring;
mod prefer_batch_updates;
mod prefer_signal_in_jsx;
mod prefer_value_read;
mod require_use_signals;

pub use no_mutation_in_computed::NoMutationInComputed;
pub use no_peek_in_render::NoPeekInRender;
pub use no_signal_destructuring::NoSignalDestructuring;
pub use prefer_batch_updates::PreferBatchUpdates;
pub use prefer_signal_in_jsx::PreferSignalInJsx;
pub use prefer_value_read::PreferValueRead;
pub use require_use_signals::RequireUseSignals;
