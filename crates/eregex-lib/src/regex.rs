//! Compiled patterns and their builder.

use eregex_bytecode::{Colors, Program, RegexOptions, dump};
use eregex_vm::{FuelLimits, MatchPolicy, PrintTracer, RegexResult, VM};

use crate::Result;

/// A compiled pattern together with the limits and policy it runs with.
///
/// The program is immutable, so one `Regex` can serve any number of
/// concurrent match calls.
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: String,
    program: Program,
    limits: FuelLimits,
    policy: MatchPolicy,
}

/// Builder for [`Regex`].
#[derive(Clone, Debug)]
pub struct RegexBuilder<'a> {
    pattern: &'a str,
    options: RegexOptions,
    limits: FuelLimits,
    policy: MatchPolicy,
}

impl<'a> RegexBuilder<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            options: RegexOptions::NONE,
            limits: FuelLimits::default(),
            policy: MatchPolicy::default(),
        }
    }

    /// Options recorded in the program and applied to every match call.
    pub fn options(mut self, options: RegexOptions) -> Self {
        self.options = options;
        self
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    pub fn fork_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.fork_limit(limit);
        self
    }

    pub fn policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `policy(MatchPolicy::LeftmostLongest)`.
    pub fn longest(self) -> Self {
        self.policy(MatchPolicy::LeftmostLongest)
    }

    pub fn build(self) -> Result<Regex> {
        let program = eregex_compiler::compile(self.pattern, self.options)?;
        Ok(Regex {
            pattern: self.pattern.to_string(),
            program,
            limits: self.limits,
            policy: self.policy,
        })
    }
}

impl Regex {
    /// Compile `pattern` with no options, default limits and leftmost-first
    /// matching.
    pub fn new(pattern: &str) -> Result<Self> {
        RegexBuilder::new(pattern).build()
    }

    /// Compile `pattern` with `options`.
    pub fn compile(pattern: &str, options: RegexOptions) -> Result<Self> {
        RegexBuilder::new(pattern).options(options).build()
    }

    pub fn builder(pattern: &str) -> RegexBuilder<'_> {
        RegexBuilder::new(pattern)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Number of numbered capture groups.
    pub fn captures_len(&self) -> usize {
        self.program.capture_groups_count()
    }

    /// Named group names in pattern order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.program.group_names().iter().map(String::as_str)
    }

    /// Match at the start of `subject`; see [`VM::matches`].
    pub fn matches(&self, subject: impl AsRef<[u8]>, options: RegexOptions) -> Result<RegexResult> {
        Ok(self.vm().matches(subject, options)?)
    }

    /// Every non-overlapping match in `subject`; see [`VM::search`].
    pub fn search(&self, subject: impl AsRef<[u8]>, options: RegexOptions) -> Result<RegexResult> {
        Ok(self.vm().search(subject, options)?)
    }

    pub fn has_match(&self, subject: impl AsRef<[u8]>, options: RegexOptions) -> Result<bool> {
        Ok(self.vm().has_match(subject, options)?)
    }

    /// Run one match call with `tracer` attached, returning the collected
    /// trace lines alongside the outcome.
    pub fn trace(
        &self,
        subject: impl AsRef<[u8]>,
        options: RegexOptions,
        colors: Colors,
    ) -> (Vec<String>, Result<RegexResult>) {
        let mut tracer = PrintTracer::new(&self.program, colors);
        let outcome = self
            .vm()
            .execute_with(subject.as_ref(), options, &mut tracer)
            .map_err(Into::into);
        (tracer.into_lines(), outcome)
    }

    /// Disassembly of the compiled program.
    pub fn dump(&self, colors: Colors) -> String {
        dump(&self.program, colors)
    }

    fn vm(&self) -> VM<'_> {
        VM::builder(&self.program)
            .limits(self.limits)
            .policy(self.policy)
            .build()
    }
}
