//! Command dispatch: the imperative shell around the pure transducer.
//!
//! Actions emit opaque commands; the dispatcher routes each command kind to
//! exactly one registered handler. Render handlers hand a screen to the
//! presentation layer synchronously; query handlers spawn an effect-provider
//! call and feed its settlement back into the transducer as a new event.
//!
//! Re-entry is always deferred through an event queue, so a handler can
//! never re-enter `step` while the step that produced its command is still
//! running, and events are processed strictly in arrival order.

mod command;
mod dispatcher;
mod error;
mod runtime;
mod sink;

pub use command::Command;
pub use dispatcher::{CommandHandler, Dispatcher};
pub use error::DispatchError;
pub use runtime::Runtime;
pub use sink::{event_channel, EventSink, WeakEventSink};
