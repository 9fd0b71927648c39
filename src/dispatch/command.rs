//! Command trait for action outputs.
//!
//! Commands are opaque to the transducer; only the dispatcher's registered
//! handlers give them meaning. Like events, they are tagged unions with a
//! fieldless kind mirror used for handler registration.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for dispatcher commands.
pub trait Command: Debug + Send + Sync {
    /// Fieldless mirror of the command union, used as the registration key.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync;

    /// The kind tag of this command, independent of its params.
    fn kind(&self) -> Self::Kind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestCommand {
        Render(String),
        Lookup { id: u64 },
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestCommandKind {
        Render,
        Lookup,
    }

    impl Command for TestCommand {
        type Kind = TestCommandKind;

        fn kind(&self) -> TestCommandKind {
            match self {
                Self::Render(_) => TestCommandKind::Render,
                Self::Lookup { .. } => TestCommandKind::Lookup,
            }
        }
    }

    #[test]
    fn kind_ignores_params() {
        assert_eq!(
            TestCommand::Render("a".into()).kind(),
            TestCommand::Render("b".into()).kind()
        );
        assert_ne!(
            TestCommand::Render("a".into()).kind(),
            TestCommand::Lookup { id: 1 }.kind()
        );
    }
}
