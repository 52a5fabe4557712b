use std::fmt::Debug;
use std::thread;

use derive_more::IsVariant;

use super::{MappedErrors, OrderedErrors};

type Entries<'a, K, V> = Box<dyn Iterator<Item = (K, &'a V)> + 'a>;
type Task<'a, K, V, E> = Box<dyn FnMut(&'a V, K) -> Result<(), E> + 'a>;
type Hook<'a> = Box<dyn FnOnce() + 'a>;

/// A [`ForAllPromise`] over the values of an [`OrderedList`](crate::collections::OrderedList),
/// keyed by index.
pub type OrderedListForAllPromise<'a, T, E> = ForAllPromise<'a, usize, T, E, OrderedErrors<E>>;

/// A [`ForAllPromise`] over the values of a [`Map`](crate::collections::Map), keyed by key.
pub type MapForAllPromise<'a, T, E> = ForAllPromise<'a, &'a str, T, E, MappedErrors<E>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
enum State {
    Pending,
    Executed,
}

/// Runs a fallible task for every entry of a collection, at most once, aggregating the failures.
///
/// - `K` is the key handed to the task next to each value (an index or a map key).
/// - `A` is the error aggregate produced when at least one task fails.
///
/// A promise starts out pending. [`execute`](ForAllPromise::execute) moves it to executed,
/// which is terminal: executing again does nothing. A pending promise executes itself when it is
/// dropped, see the [module documentation](super) for the consequences.
///
/// # Examples
/// ```
/// # use typed_collections::collections::OrderedList;
/// let list = OrderedList::from([1, 2, 3]);
/// let result = list
///     .for_all(|value, _| if *value == 2 { Err("two") } else { Ok(()) })
///     .execute();
///
/// let errors = result.unwrap_err();
/// assert_eq!(errors.failures().collect::<Vec<_>>(), [(1, &"two")]);
/// ```
#[must_use = "a for-all promise runs its task when executed or dropped, execute it to observe failures"]
pub struct ForAllPromise<'a, K: Copy + Debug, V: 'a, E, A> {
    entries: Option<Entries<'a, K, V>>,
    task: Task<'a, K, V, E>,
    aggregate: fn(Vec<(K, Option<E>)>) -> A,
    finally: Option<Hook<'a>>,
    suppress_errors: bool,
    stop_on_error: bool,
    state: State,
}

impl<'a, K: Copy + Debug, V: 'a, E, A> ForAllPromise<'a, K, V, E, A> {
    pub(crate) fn new<I, F>(
        entries: I,
        task: F,
        aggregate: fn(Vec<(K, Option<E>)>) -> A,
    ) -> ForAllPromise<'a, K, V, E, A>
    where
        I: Iterator<Item = (K, &'a V)> + 'a,
        F: FnMut(&'a V, K) -> Result<(), E> + 'a,
    {
        ForAllPromise {
            entries: Some(Box::new(entries)),
            task: Box::new(task),
            aggregate,
            finally: None,
            suppress_errors: false,
            stop_on_error: false,
            state: State::Pending,
        }
    }

    /// Returns true once the promise has run.
    pub const fn is_executed(&self) -> bool {
        matches!(self.state, State::Executed)
    }

    /// Registers `hook` to run after every task has been attempted, before any error is returned.
    /// A later call replaces the previous hook.
    pub fn finally<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + 'a,
    {
        if self.refuse_reconfiguration("finally") {
            return self;
        }
        self.finally = Some(Box::new(hook));
        self
    }

    /// Stops the execution at the first failing task. Entries after it are never visited.
    pub fn stop_on_error(mut self) -> Self {
        if !self.refuse_reconfiguration("stop_on_error") {
            self.stop_on_error = true;
        }
        self
    }

    /// Discards the error aggregate, making [`execute`](ForAllPromise::execute) succeed even if
    /// tasks failed. The `finally` hook still runs.
    pub fn suppress_errors(mut self) -> Self {
        if !self.refuse_reconfiguration("suppress_errors") {
            self.suppress_errors = true;
        }
        self
    }

    fn refuse_reconfiguration(&self, flag: &str) -> bool {
        if self.state.is_executed() {
            tracing::warn!(flag, "ignoring configuration of an already executed for-all promise");
            return true;
        }
        false
    }

    /// Runs the task for every entry, in order, unless the promise already ran.
    ///
    /// Failures are recorded per key. With [`stop_on_error`](ForAllPromise::stop_on_error), the
    /// first failure ends the iteration. Afterwards, the `finally` hook runs (if any) and then the
    /// aggregate of all failures is returned, unless
    /// [`suppress_errors`](ForAllPromise::suppress_errors) was set.
    ///
    /// Calling this a second time does nothing and returns `Ok(())`.
    pub fn execute(&mut self) -> Result<(), A> {
        if self.state.is_executed() {
            tracing::warn!("for-all promise was already executed, ignoring execute()");
            return Ok(());
        }
        self.state = State::Executed;

        let mut recorded = Vec::new();
        let mut failures = 0_usize;

        if let Some(entries) = self.entries.take() {
            tracing::debug!(stop_on_error = self.stop_on_error, "executing for-all promise");

            for (key, value) in entries {
                let outcome = (self.task)(value, key);
                let failed = outcome.is_err();
                recorded.push((key, outcome.err()));

                if failed {
                    failures += 1;
                    tracing::debug!(?key, "for-all task failed");
                    if self.stop_on_error {
                        break;
                    }
                }
            }
        }

        tracing::debug!(attempted = recorded.len(), failures, "for-all promise executed");

        let aggregate = (failures > 0).then(|| (self.aggregate)(recorded));

        if let Some(finally) = self.finally.take() {
            finally();
        }

        match aggregate {
            None => Ok(()),
            Some(_) if self.suppress_errors => {
                tracing::debug!(failures, "suppressed for-all failures");
                Ok(())
            },
            Some(aggregate) => Err(aggregate),
        }
    }
}

impl<'a, K: Copy + Debug, V: 'a, E, A> Drop for ForAllPromise<'a, K, V, E, A> {
    fn drop(&mut self) {
        if self.state.is_executed() {
            return;
        }

        if thread::panicking() {
            tracing::warn!("for-all promise dropped during a panic, its task will not run");
            return;
        }

        tracing::debug!("for-all promise dropped before execution, executing now");
        if self.execute().is_err() {
            tracing::error!(
                "implicitly executed for-all promise failed, the aggregated errors were discarded"
            );
        }
    }
}
