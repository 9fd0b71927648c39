//! Command routing to registered handlers.

use crate::dispatch::command::Command;
use crate::dispatch::error::DispatchError;
use crate::dispatch::sink::EventSink;
use std::collections::HashMap;
use std::sync::Arc;

/// Executes one command kind.
///
/// Handlers are constructed with whatever collaborators they need (a screen
/// sink, configuration) and receive the event-submission callback and the
/// effect provider on every call — no ambient globals.
///
/// `handle` must return promptly. Render handlers call the presentation
/// layer synchronously and send no events. Query handlers spawn a task that
/// awaits the provider and sends the settlement event through `next`; they
/// never block the dispatch loop, which is what allows responses to race
/// and staleness to arise.
pub trait CommandHandler<C, E, P>: Send + Sync
where
    C: Command,
{
    fn handle(&self, command: C, next: &EventSink<E>, provider: &Arc<P>);
}

/// Routes each command of a step, in order, to its registered handler.
pub struct Dispatcher<C, E, P>
where
    C: Command,
{
    handlers: HashMap<C::Kind, Box<dyn CommandHandler<C, E, P>>>,
}

impl<C, E, P> Dispatcher<C, E, P>
where
    C: Command,
{
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register the handler for a command kind.
    ///
    /// Exactly one handler may own a kind; a second registration is a
    /// wiring defect.
    pub fn register(
        &mut self,
        kind: C::Kind,
        handler: Box<dyn CommandHandler<C, E, P>>,
    ) -> Result<(), DispatchError> {
        if self.handlers.contains_key(&kind) {
            return Err(DispatchError::DuplicateHandler {
                kind: format!("{kind:?}"),
            });
        }
        self.handlers.insert(kind, handler);
        Ok(())
    }

    /// Route one command to its handler.
    ///
    /// A command kind without a handler is a wiring defect and fails
    /// loudly; it is never silently dropped.
    pub fn dispatch(
        &self,
        command: C,
        next: &EventSink<E>,
        provider: &Arc<P>,
    ) -> Result<(), DispatchError> {
        let kind = command.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or_else(|| DispatchError::UnhandledCommand {
                kind: format!("{kind:?}"),
            })?;
        handler.handle(command, next, provider);
        Ok(())
    }
}

impl<C, E, P> Default for Dispatcher<C, E, P>
where
    C: Command,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::sink::event_channel;
    use std::sync::Mutex;

    #[derive(Clone, Debug, PartialEq)]
    enum TestCommand {
        Print(String),
        Fetch(u64),
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestCommandKind {
        Print,
        Fetch,
    }

    impl Command for TestCommand {
        type Kind = TestCommandKind;

        fn kind(&self) -> TestCommandKind {
            match self {
                Self::Print(_) => TestCommandKind::Print,
                Self::Fetch(_) => TestCommandKind::Fetch,
            }
        }
    }

    struct Recorder {
        seen: Arc<Mutex<Vec<TestCommand>>>,
    }

    impl CommandHandler<TestCommand, u32, ()> for Recorder {
        fn handle(&self, command: TestCommand, _next: &EventSink<u32>, _provider: &Arc<()>) {
            self.seen.lock().unwrap().push(command);
        }
    }

    #[test]
    fn dispatch_routes_to_the_registered_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher: Dispatcher<TestCommand, u32, ()> = Dispatcher::new();
        dispatcher
            .register(TestCommandKind::Print, Box::new(Recorder { seen: seen.clone() }))
            .unwrap();

        let (sink, _rx) = event_channel();
        dispatcher
            .dispatch(TestCommand::Print("hello".into()), &sink, &Arc::new(()))
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![TestCommand::Print("hello".into())]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher: Dispatcher<TestCommand, u32, ()> = Dispatcher::new();
        dispatcher
            .register(TestCommandKind::Print, Box::new(Recorder { seen: seen.clone() }))
            .unwrap();

        let result = dispatcher.register(TestCommandKind::Print, Box::new(Recorder { seen }));

        assert!(matches!(
            result,
            Err(DispatchError::DuplicateHandler { .. })
        ));
    }

    #[test]
    fn missing_handler_fails_loudly() {
        let dispatcher: Dispatcher<TestCommand, u32, ()> = Dispatcher::new();
        let (sink, _rx) = event_channel();

        let result = dispatcher.dispatch(TestCommand::Fetch(7), &sink, &Arc::new(()));

        assert_eq!(
            result,
            Err(DispatchError::UnhandledCommand {
                kind: "Fetch".into()
            })
        );
    }
}
