// crates/core/src/validator.rs
use log::{debug, trace};

use crate::config::ValidatorConfig;
use crate::outcome::{Report, ValidationResult};
use crate::stack::BoundedStack;
use crate::symbol::{Bracket, Symbol, classify};

/// Position of a [`Validator`] in its run.
///
/// `Failed` and `Done` are terminal: once reached, no further input changes
/// the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Scanning,
    /// Cut short by a mismatch, an unmatched closer or a stack fault.
    Failed(ValidationResult),
    /// End of input reached; holds `Valid` or `UnclosedOpener`.
    Done(ValidationResult),
}

impl State {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Scanning)
    }
}

/// Whether the caller should keep feeding characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// Resumable nesting validator.
///
/// Characters may be fed one at a time as they arrive; the stack lives inside
/// the validator between calls. One validator checks one stream: use a fresh
/// instance (or [`Validator::reset`]) for the next one.
#[derive(Debug, Clone)]
pub struct Validator {
    stack: BoundedStack<Bracket>,
    terminator: Option<char>,
    state: State,
    consumed: usize,
    max_depth: usize,
    failed_at: Option<usize>,
}

impl Validator {
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            stack: BoundedStack::new(config.capacity),
            terminator: config.terminator,
            state: State::Scanning,
            consumed: 0,
            max_depth: 0,
            failed_at: None,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(ValidatorConfig::new(capacity))
    }

    /// Consume one character.
    ///
    /// Returns [`Step::Stop`] once the run has reached a terminal state,
    /// either because of this character or an earlier one.
    pub fn feed(&mut self, c: char) -> Step {
        if self.state.is_terminal() {
            return Step::Stop;
        }
        if self.terminator == Some(c) {
            self.finish();
            return Step::Stop;
        }

        let offset = self.consumed;
        self.consumed += 1;

        match classify(c) {
            Symbol::Opener(bracket) => self.open(bracket, offset),
            Symbol::Closer(bracket) => self.close(bracket, offset),
            Symbol::Other => Step::Continue,
        }
    }

    pub fn feed_str(&mut self, input: &str) -> Step {
        self.feed_iter(input.chars())
    }

    pub fn feed_iter<I>(&mut self, input: I) -> Step
    where
        I: IntoIterator<Item = char>,
    {
        for c in input {
            if self.feed(c) == Step::Stop {
                return Step::Stop;
            }
        }
        if self.state.is_terminal() {
            Step::Stop
        } else {
            Step::Continue
        }
    }

    /// End the scan and return the verdict.
    ///
    /// Calling this again, or after a failure, returns the same verdict.
    pub fn finish(&mut self) -> ValidationResult {
        match self.state {
            State::Failed(result) | State::Done(result) => result,
            State::Scanning => {
                let result = match self.stack.peek() {
                    None => ValidationResult::Valid,
                    Some(innermost) => ValidationResult::UnclosedOpener {
                        opener: innermost.open(),
                    },
                };
                debug!(
                    "scan finished after {} chars: {result:?} ({} still open)",
                    self.consumed,
                    self.stack.len()
                );
                self.state = State::Done(result);
                result
            }
        }
    }

    /// Finish the run and describe it.
    pub fn report(&mut self) -> Report {
        let result = self.finish();
        Report {
            result,
            offset: self.failed_at,
            consumed: self.consumed,
            max_depth: self.max_depth,
            remaining: self.stack.len(),
        }
    }

    /// Drop all state so the validator can check an independent stream.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.state = State::Scanning;
        self.consumed = 0;
        self.max_depth = 0;
        self.failed_at = None;
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// The verdict, if the run has reached a terminal state.
    #[must_use]
    pub const fn result(&self) -> Option<ValidationResult> {
        match self.state {
            State::Scanning => None,
            State::Failed(result) | State::Done(result) => Some(result),
        }
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    fn open(&mut self, bracket: Bracket, offset: usize) -> Step {
        match self.stack.push(bracket) {
            Ok(()) => {
                self.max_depth = self.max_depth.max(self.stack.len());
                trace!("push {:?} at {offset}, depth {}", bracket.open(), self.stack.len());
                Step::Continue
            }
            Err(err) => self.fail(err.into(), offset),
        }
    }

    fn close(&mut self, bracket: Bracket, offset: usize) -> Step {
        // Nothing open is a property of the input, not a stack fault: decide
        // it before touching the stack.
        if self.stack.is_empty() {
            return self.fail(
                ValidationResult::UnmatchedCloser {
                    closer: bracket.close(),
                },
                offset,
            );
        }

        match self.stack.pop() {
            Ok(top) if top == bracket => {
                trace!("pop {:?} at {offset}, depth {}", top.open(), self.stack.len());
                Step::Continue
            }
            Ok(top) => self.fail(
                ValidationResult::Mismatch {
                    expected: top.open(),
                    found: bracket.close(),
                },
                offset,
            ),
            Err(err) => self.fail(err.into(), offset),
        }
    }

    fn fail(&mut self, result: ValidationResult, offset: usize) -> Step {
        debug!("scan failed at offset {offset}: {result:?}");
        self.failed_at = Some(offset);
        self.state = State::Failed(result);
        Step::Stop
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

/// Validate a character sequence with a fresh [`Validator`].
pub fn validate<I>(input: I, config: &ValidatorConfig) -> ValidationResult
where
    I: IntoIterator<Item = char>,
{
    let mut validator = Validator::new(*config);
    validator.feed_iter(input);
    validator.finish()
}

/// Validate `input` with the default capacity, stopping at the first newline.
#[must_use]
pub fn validate_str(input: &str) -> ValidationResult {
    validate(input.chars(), &ValidatorConfig::default())
}
