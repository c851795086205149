//! Transition resolution and delegate dispatch.

use super::error::{DelegateError, InvalidTransitionError, TriggerError};
use crate::core::{Argument, Arguments, Event, State, Transition};
use crate::delegate::{BoxDelegate, BoxError, Delegate, HandleError};
use std::sync::Arc;
use tracing::{debug, trace};

/// A stateful structure exposing its current state.
///
/// The engine only reads the state; changing it is up to the delegates.
pub trait Subject<S: State>: Send + Sync + 'static {
    fn current_state(&self) -> Result<S, BoxError>;
}

/// Resolves `(state, event)` pairs against a fixed transition table and hands
/// the matching transition's action to a delegate.
///
/// The machine owns no state of its own, so one instance can serve any
/// number of subjects. It is shared behind an [`Arc`]; sharing it across
/// threads is as safe as the delegate's `handle` is.
pub struct StateMachine<S: State, E: Event> {
    delegate: BoxDelegate<S, E>,
    transitions: Vec<Transition<S, E>>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a state machine from a delegate and a transition table.
    ///
    /// The table is kept in declaration order. Before the machine is
    /// returned, `delegate.set_state_machine` receives a weak reference to
    /// it, so state-machine-aware delegates (also ones nested in composites)
    /// can trigger further transitions later.
    pub fn new<D>(delegate: D, transitions: Vec<Transition<S, E>>) -> Arc<Self>
    where
        D: Delegate<S, E> + 'static,
    {
        Arc::new_cyclic(|machine| {
            delegate.set_state_machine(machine);
            Self {
                delegate: Box::new(delegate),
                transitions,
            }
        })
    }

    /// The transition table, in declaration order (pure).
    pub fn transitions(&self) -> &[Transition<S, E>] {
        &self.transitions
    }

    /// First declared transition for the state/event pair (pure).
    pub fn find_transition(&self, state: &S, event: &E) -> Option<&Transition<S, E>> {
        self.transitions.iter().find(|t| t.matches(state, event))
    }

    /// Check if `event` is legal in `state` (pure).
    pub fn can_trigger(&self, state: &S, event: &E) -> bool {
        self.find_transition(state, event).is_some()
    }

    /// Fire `event` from `current_state` and call the delegate with the
    /// matching transition's action.
    ///
    /// A delegate answering [`HandleError::StopPropagation`] counts as
    /// success.
    pub fn trigger(
        &self,
        current_state: &S,
        event: &E,
        args: Arguments,
    ) -> Result<(), TriggerError<S, E>> {
        let Some(transition) = self.find_transition(current_state, event) else {
            debug!(
                state = current_state.name(),
                event = event.name(),
                "no transition matches"
            );
            let err = InvalidTransitionError::new(current_state.clone(), event.clone(), args);
            return Err(err.into());
        };

        let Some(action) = transition.action() else {
            trace!(
                from = transition.from.name(),
                event = event.name(),
                to = transition.to.name(),
                "transition has no action"
            );
            return Ok(());
        };

        trace!(
            from = transition.from.name(),
            event = event.name(),
            to = transition.to.name(),
            action,
            "dispatching transition action"
        );

        let (from, to) = (&transition.from, &transition.to);
        match self.delegate.handle(action, from, to, &args) {
            Ok(()) => Ok(()),
            Err(HandleError::StopPropagation) => {
                trace!(action, "delegate stopped propagation");
                Ok(())
            }
            Err(HandleError::Failure(cause)) => {
                debug!(
                    state = current_state.name(),
                    event = event.name(),
                    action,
                    error = %cause,
                    "delegate failed"
                );
                Err(DelegateError::new(
                    cause,
                    current_state.clone(),
                    event.clone(),
                    args,
                    to.clone(),
                    action.to_string(),
                )
                .into())
            }
        }
    }

    /// Fire `event` using the subject's current state.
    ///
    /// The subject is passed to the delegate as the first argument, ahead of
    /// `args`. A failing state accessor is reported as
    /// [`TriggerError::Subject`] with its error unchanged.
    pub fn trigger_subject<T>(
        &self,
        subject: Arc<T>,
        event: &E,
        args: Arguments,
    ) -> Result<(), TriggerError<S, E>>
    where
        T: Subject<S>,
    {
        let current_state = subject.current_state().map_err(TriggerError::Subject)?;
        let subject: Argument = subject;

        self.trigger(&current_state, event, args.prepend(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::testing::{Recorder, Reply};
    use crate::delegate::{ActionMuxDelegate, CompositeDelegate, StateMachineCell};
    use std::sync::{Mutex, Weak};

    fn s(value: &str) -> String {
        value.to_string()
    }

    fn table() -> Vec<Transition<String, String>> {
        let transition = Transition::new(s("current_state"), s("event"), s("next_state"));
        vec![transition.with_action("action")]
    }

    #[test]
    fn delegate_invoked() {
        let delegate = Recorder::new(Reply::Ok);
        let machine = StateMachine::new(Arc::clone(&delegate), table());

        let result = machine.trigger(
            &s("current_state"),
            &s("event"),
            Arguments::new().with("argument"),
        );

        assert!(result.is_ok());
        let calls = delegate.calls();
        assert_eq!(calls.len(), 1);
        let (action, from, to, args) = &calls[0];
        assert_eq!(action, "action");
        assert_eq!(from, "current_state");
        assert_eq!(to, "next_state");
        assert_eq!(args.len(), 1);
        assert_eq!(args.get::<&str>(0), Some(&"argument"));
    }

    #[test]
    fn first_transition_wins() {
        let delegate = Recorder::new(Reply::Ok);
        let mut transitions = table();
        let other = Transition::new(s("current_state"), s("event"), s("other_next_state"));
        transitions.push(other.with_action("other_action"));
        let machine = StateMachine::new(Arc::clone(&delegate), transitions);

        machine
            .trigger(&s("current_state"), &s("event"), Arguments::new())
            .unwrap();

        let calls = delegate.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "action");
        assert_eq!(calls[0].2, "next_state");
    }

    #[test]
    fn no_action_skips_delegate() {
        let delegate = Recorder::new(Reply::Fail("should not run"));
        let bare = Transition::new(s("current_state"), s("event"), s("next_state"));
        let machine = StateMachine::new(Arc::clone(&delegate), vec![bare]);

        let result = machine.trigger(
            &s("current_state"),
            &s("event"),
            Arguments::new().with("argument"),
        );

        assert!(result.is_ok());
        assert!(delegate.calls().is_empty());
    }

    #[test]
    fn invalid_transition() {
        let delegate = Recorder::new(Reply::Ok);
        let machine = StateMachine::new(Arc::clone(&delegate), table());
        let args = Arguments::new().with("argument");

        let err = machine
            .trigger(&s("other_current_state"), &s("event"), args.clone())
            .unwrap_err();

        let TriggerError::InvalidTransition(err) = err else {
            panic!("Expected InvalidTransition error");
        };
        assert_eq!(
            err.to_string(),
            "cannot transition from \"other_current_state\" state triggered by \"event\" event"
        );
        assert_eq!(err.current_state(), "other_current_state");
        assert_eq!(err.event(), "event");
        assert!(err.arguments().same_values(&args));
        assert!(delegate.calls().is_empty());
    }

    #[test]
    fn stop_propagation_is_swallowed() {
        let delegate = Recorder::new(Reply::Stop);
        let machine = StateMachine::new(Arc::clone(&delegate), table());

        let result = machine.trigger(&s("current_state"), &s("event"), Arguments::new());

        assert!(result.is_ok());
        assert_eq!(delegate.calls().len(), 1);
    }

    #[test]
    fn delegate_error_is_wrapped() {
        let machine = StateMachine::new(Recorder::new(Reply::Fail("error happened")), table());
        let args = Arguments::new().with("argument");

        let err = machine
            .trigger(&s("current_state"), &s("event"), args.clone())
            .unwrap_err();

        let TriggerError::Delegate(err) = err else {
            panic!("Expected Delegate error");
        };
        assert_eq!(
            err.to_string(),
            "delegate reported an error during transition from \"current_state\" state triggered by \"event\" event: error happened"
        );
        assert_eq!(err.cause().to_string(), "error happened");
        assert_eq!(err.next_state(), "next_state");
        assert_eq!(err.action(), "action");
        assert_eq!(err.current_state(), "current_state");
        assert_eq!(err.event(), "event");
        assert!(err.arguments().same_values(&args));
    }

    #[derive(Debug, PartialEq)]
    struct Jammed;

    impl std::fmt::Display for Jammed {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("jammed")
        }
    }

    impl std::error::Error for Jammed {}

    #[test]
    fn delegate_error_keeps_original_cause() {
        let delegate = crate::delegate::FnDelegate::new(
            |_: &str, _: &String, _: &String, _: &Arguments| Err(HandleError::failure(Jammed)),
        );
        let machine = StateMachine::new(delegate, table());

        let err = machine
            .trigger(&s("current_state"), &s("event"), Arguments::new())
            .unwrap_err();

        let cause = err.as_delegate().unwrap().cause();
        assert_eq!(cause.downcast_ref::<Jammed>(), Some(&Jammed));
    }

    struct Door {
        state: Mutex<String>,
    }

    impl Subject<String> for Door {
        fn current_state(&self) -> Result<String, BoxError> {
            Ok(self.state.lock().unwrap().clone())
        }
    }

    #[test]
    fn trigger_subject_prepends_subject() {
        let delegate = Recorder::new(Reply::Ok);
        let machine = StateMachine::new(Arc::clone(&delegate), table());
        let door = Arc::new(Door {
            state: Mutex::new(s("current_state")),
        });

        let args = Arguments::new().with("argument");
        machine
            .trigger_subject(Arc::clone(&door), &s("event"), args)
            .unwrap();

        let calls = delegate.calls();
        assert_eq!(calls.len(), 1);
        let args = &calls[0].3;
        assert_eq!(args.len(), 2);
        assert!(Arc::ptr_eq(&args.get_shared::<Door>(0).unwrap(), &door));
        assert_eq!(args.get::<&str>(1), Some(&"argument"));
    }

    #[test]
    fn trigger_subject_reports_invalid_transition() {
        let machine = StateMachine::new(Recorder::new(Reply::Ok), table());
        let door = Arc::new(Door {
            state: Mutex::new(s("next_state")),
        });

        let err = machine
            .trigger_subject(door, &s("event"), Arguments::new())
            .unwrap_err();

        let err = err.as_invalid_transition().unwrap();
        assert_eq!(err.current_state(), "next_state");
        assert_eq!(err.arguments().len(), 1);
    }

    struct Unreadable;

    impl Subject<String> for Unreadable {
        fn current_state(&self) -> Result<String, BoxError> {
            Err("sensor offline".into())
        }
    }

    #[test]
    fn trigger_subject_propagates_accessor_failure() {
        let delegate = Recorder::new(Reply::Ok);
        let machine = StateMachine::new(Arc::clone(&delegate), table());

        let err = machine
            .trigger_subject(Arc::new(Unreadable), &s("event"), Arguments::new())
            .unwrap_err();

        assert!(matches!(&err, TriggerError::Subject(_)));
        assert_eq!(err.to_string(), "sensor offline");
        assert!(delegate.calls().is_empty());
    }

    #[test]
    fn state_machine_aware_delegate_receives_machine() {
        let delegate = Recorder::new(Reply::Ok);

        let _machine = StateMachine::new(Arc::clone(&delegate), table());

        assert_eq!(delegate.machine_sets(), 1);
    }

    #[test]
    fn nested_aware_delegates_receive_machine_once() {
        let in_mux = Recorder::new(Reply::Ok);
        let in_composite = Recorder::new(Reply::Ok);
        let mux = ActionMuxDelegate::default().with("action", Arc::clone(&in_mux));
        let composite = CompositeDelegate::default()
            .with(mux)
            .with(Arc::clone(&in_composite));

        let _machine = StateMachine::new(composite, table());

        assert_eq!(in_mux.machine_sets(), 1);
        assert_eq!(in_composite.machine_sets(), 1);
    }

    /// Moves a shared counter forward by re-triggering the machine from
    /// inside `handle`.
    struct Relay {
        machine: StateMachineCell<String, String>,
        state: Mutex<String>,
    }

    impl Delegate<String, String> for Relay {
        fn handle(
            &self,
            action: &str,
            _from: &String,
            to: &String,
            _args: &Arguments,
        ) -> Result<(), HandleError> {
            *self.state.lock().unwrap() = to.clone();
            if action == "forward" {
                let machine = self
                    .machine
                    .get()
                    .ok_or_else(|| HandleError::failure("machine dropped"))?;
                machine
                    .trigger(to, &s("next"), Arguments::new())
                    .map_err(HandleError::failure)?;
            }
            Ok(())
        }

        fn set_state_machine(&self, machine: &Weak<StateMachine<String, String>>) {
            self.machine.set(machine);
        }
    }

    #[test]
    fn aware_delegate_can_retrigger() {
        let relay = Arc::new(Relay {
            machine: StateMachineCell::new(),
            state: Mutex::new(s("a")),
        });
        let machine = StateMachine::new(
            Arc::clone(&relay),
            vec![
                Transition::new(s("a"), s("next"), s("b")).with_action("forward"),
                Transition::new(s("b"), s("next"), s("c")).with_action("settle"),
            ],
        );

        machine
            .trigger(&s("a"), &s("next"), Arguments::new())
            .unwrap();

        assert_eq!(*relay.state.lock().unwrap(), "c");
    }

    #[test]
    fn lookup_helpers_agree_with_trigger() {
        let machine = StateMachine::new(Recorder::new(Reply::Ok), table());

        assert_eq!(machine.transitions().len(), 1);
        assert!(machine.can_trigger(&s("current_state"), &s("event")));
        assert!(!machine.can_trigger(&s("next_state"), &s("event")));
        assert_eq!(
            machine
                .find_transition(&s("current_state"), &s("event"))
                .map(|t| t.to.as_str()),
            Some("next_state")
        );
    }
}
