//! Virtual machine for executing compiled eregex programs.

use eregex_bytecode::{Compare, CompareEntry, Instruction, LiteralRef, Program, RegexOptions};

use super::error::RuntimeError;
use super::fork::ForkStack;
use super::result::RegexResult;
use super::state::{GroupSlot, MatchState};
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for one match attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum instructions per attempt (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum pending forks (default: 5,000).
    ///
    /// Every iteration of a greedy loop leaves one fork behind, so `a*`
    /// over more than 5,000 bytes fails with `ForkLimitExceeded` at the
    /// default. Raise the limit for long runs.
    pub(crate) fork_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            fork_limit: 5000,
        }
    }
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Set the fork stack limit. Bounds the iterations of one greedy loop
    /// as well as nested alternatives.
    pub fn fork_limit(mut self, limit: u32) -> Self {
        self.fork_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
    pub fn get_fork_limit(&self) -> u32 {
        self.fork_limit
    }
}

/// Which match wins when several paths from the same start reach `Exit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// The first path to reach `Exit`, in priority order.
    #[default]
    LeftmostFirst,
    /// The path that ends furthest right. Explores every alternative.
    LeftmostLongest,
}

/// What the loop does after one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExecutionResult {
    Continue,
    /// Take the jump to the target now, defer the fallthrough.
    ForkPrioHigh(usize),
    /// Continue with the fallthrough, defer the jump to the target.
    ForkPrioLow(usize),
    /// This path is dead.
    Failed,
    /// Reached `Exit` with alternatives still pending.
    ExitWithFork,
    /// Reached `Exit` with nothing left to try.
    Exit,
}

/// Executes one program. Cheap to build; holds no per-match state.
#[derive(Clone, Copy, Debug)]
pub struct VM<'p> {
    program: &'p Program,
    limits: FuelLimits,
    policy: MatchPolicy,
}

/// Builder for VM instances.
pub struct VMBuilder<'p> {
    program: &'p Program,
    limits: FuelLimits,
    policy: MatchPolicy,
}

impl<'p> VMBuilder<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            limits: FuelLimits::default(),
            policy: MatchPolicy::default(),
        }
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Set the fork stack limit. Bounds the iterations of one greedy loop
    /// as well as nested alternatives.
    pub fn fork_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.fork_limit(limit);
        self
    }

    pub fn policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the VM.
    pub fn build(self) -> VM<'p> {
        VM {
            program: self.program,
            limits: self.limits,
            policy: self.policy,
        }
    }
}

impl<'p> VM<'p> {
    /// VM with default limits and policy.
    pub fn new(program: &'p Program) -> Self {
        Self::builder(program).build()
    }

    /// Create a VM builder.
    pub fn builder(program: &'p Program) -> VMBuilder<'p> {
        VMBuilder::new(program)
    }

    pub fn program(&self) -> &'p Program {
        self.program
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// One attempt at the start of `subject`, unless `options` (or the
    /// program) carry `GLOBAL`.
    ///
    /// The match does not have to reach the end of the subject.
    pub fn matches(
        &self,
        subject: impl AsRef<[u8]>,
        options: RegexOptions,
    ) -> Result<RegexResult, RuntimeError> {
        self.execute_with(subject.as_ref(), options, &mut NoopTracer)
    }

    /// All non-overlapping matches, scanning every start offset.
    pub fn search(
        &self,
        subject: impl AsRef<[u8]>,
        options: RegexOptions,
    ) -> Result<RegexResult, RuntimeError> {
        self.execute_with(subject.as_ref(), search_options(options), &mut NoopTracer)
    }

    /// Same attempt as [`VM::matches`] without group bookkeeping.
    pub fn has_match(
        &self,
        subject: impl AsRef<[u8]>,
        options: RegexOptions,
    ) -> Result<bool, RuntimeError> {
        let options = options | RegexOptions::SKIP_SUB_EXPR_RESULTS;
        let result = self.execute_with(subject.as_ref(), options, &mut NoopTracer)?;
        Ok(result.success)
    }

    /// Run the program with a tracer for debugging.
    ///
    /// The tracer is generic, so `NoopTracer` calls are optimized away
    /// while `PrintTracer` collects an execution trace. `options` are merged
    /// with the program's own; see [`search_options`] for what `search` adds.
    /// A `GLOBAL` run drops both line exclusions when the merged set has both.
    pub fn execute_with<T: Tracer>(
        &self,
        subject: &[u8],
        options: RegexOptions,
        tracer: &mut T,
    ) -> Result<RegexResult, RuntimeError> {
        let program = self.program;
        let mut options = program.options() | options;
        if options.contains(RegexOptions::GLOBAL) {
            options = search_options(options);
        }
        let global = options.contains(RegexOptions::GLOBAL);
        let skip_groups = options.contains(RegexOptions::SKIP_SUB_EXPR_RESULTS);
        let min_len = program.match_length_minimum();

        let mut result = RegexResult::default();
        let mut start = 0;

        // Starts with fewer bytes left than the shortest possible match
        // cannot succeed, and neither can any later start.
        while start <= subject.len() && subject.len() - start >= min_len {
            tracer.trace_attempt(start);
            let found = self.attempt(subject, start, options, &mut result.operations, tracer)?;

            let next = match found {
                Some(state) => {
                    let span = state.span();
                    tracer.trace_accept(span);
                    let groups = (!skip_groups)
                        .then(|| (state.capture_groups(), state.named_groups(program)));
                    result.push(span, groups);
                    if span.is_empty() { span.end + 1 } else { span.end }
                }
                None => start + 1,
            };

            if !global {
                break;
            }
            start = next;
        }

        Ok(result)
    }

    /// Run every path from `start` until one is accepted or none is left.
    fn attempt<T: Tracer>(
        &self,
        subject: &[u8],
        start: usize,
        options: RegexOptions,
        operations: &mut u64,
        tracer: &mut T,
    ) -> Result<Option<MatchState>, RuntimeError> {
        let mut state = MatchState::new(self.program, start);
        let mut forks = ForkStack::new(self.limits.fork_limit);
        let mut fuel = self.limits.exec_fuel;
        let mut best: Option<MatchState> = None;

        loop {
            // Fuel check
            if fuel == 0 {
                return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
            }
            fuel -= 1;
            *operations += 1;

            // Fetch and dispatch
            let instr = self.decode(state.ip);
            tracer.trace_instruction(state.ip, state.sp, &instr);
            let next = state.ip + instr.size();

            match self.step(&mut state, &instr, subject, options, !forks.is_empty()) {
                ExecutionResult::Continue => {}
                ExecutionResult::ForkPrioHigh(target) => {
                    forks.push(state.fork_at(next))?;
                    tracer.trace_fork(next);
                    state.ip = target;
                }
                ExecutionResult::ForkPrioLow(target) => {
                    forks.push(state.fork_at(target))?;
                    tracer.trace_fork(target);
                    state.ip = next;
                }
                ExecutionResult::Failed => {
                    tracer.trace_fail(state.sp);
                    match backtrack(&mut forks, tracer) {
                        Some(resumed) => state = resumed,
                        None => return Ok(best),
                    }
                }
                ExecutionResult::ExitWithFork if self.policy == MatchPolicy::LeftmostFirst => {
                    return Ok(Some(state));
                }
                ExecutionResult::ExitWithFork => {
                    tracer.trace_candidate(state.span());
                    keep_longest(&mut best, state);
                    match backtrack(&mut forks, tracer) {
                        Some(resumed) => state = resumed,
                        None => return Ok(best),
                    }
                }
                ExecutionResult::Exit => {
                    keep_longest(&mut best, state);
                    return Ok(best);
                }
            }
        }
    }

    fn step(
        &self,
        state: &mut MatchState,
        instr: &Instruction<'_>,
        subject: &[u8],
        options: RegexOptions,
        forks_pending: bool,
    ) -> ExecutionResult {
        let ip = state.ip;
        let next = ip + instr.size();
        let record = !options.contains(RegexOptions::SKIP_SUB_EXPR_RESULTS);

        match *instr {
            Instruction::Compare(cmp) => match self.compare(ip, cmp, &subject[state.sp..]) {
                Some(consumed) => {
                    state.sp += consumed;
                    state.ip = next;
                    return ExecutionResult::Continue;
                }
                None => return ExecutionResult::Failed,
            },
            Instruction::Jump(_) => {
                state.ip = self.target(ip, instr);
                return ExecutionResult::Continue;
            }
            Instruction::ForkJump(_) => return ExecutionResult::ForkPrioLow(self.target(ip, instr)),
            Instruction::ForkStay(_) => return ExecutionResult::ForkPrioHigh(self.target(ip, instr)),
            Instruction::SaveLeftCaptureGroup(group) if record => {
                slot(&mut state.groups, group as usize, ip).save_left(state.sp);
            }
            Instruction::SaveRightCaptureGroup(group) if record => {
                slot(&mut state.groups, group as usize, ip).save_right(state.sp);
            }
            Instruction::SaveLeftNamedCaptureGroup(name) if record => {
                let index = self.named_slot(ip, name);
                slot(&mut state.named, index, ip).save_left(state.sp);
            }
            Instruction::SaveRightNamedCaptureGroup(name) if record => {
                let index = self.named_slot(ip, name);
                slot(&mut state.named, index, ip).save_right(state.sp);
            }
            Instruction::SaveLeftCaptureGroup(_)
            | Instruction::SaveRightCaptureGroup(_)
            | Instruction::SaveLeftNamedCaptureGroup(_)
            | Instruction::SaveRightNamedCaptureGroup(_) => {}
            Instruction::CheckBegin => {
                let at_begin =
                    state.sp == 0 && !options.contains(RegexOptions::MATCH_NOT_BEGIN_OF_LINE);
                if !at_begin {
                    return ExecutionResult::Failed;
                }
            }
            Instruction::CheckEnd => {
                let at_end = state.sp == subject.len()
                    && !options.contains(RegexOptions::MATCH_NOT_END_OF_LINE);
                if !at_end {
                    return ExecutionResult::Failed;
                }
            }
            Instruction::Exit if forks_pending => return ExecutionResult::ExitWithFork,
            Instruction::Exit => return ExecutionResult::Exit,
        }

        state.ip = next;
        ExecutionResult::Continue
    }

    /// Bytes consumed by `cmp` at the front of `rest`, or `None` if it does
    /// not match there.
    ///
    /// Entries are alternatives; the first that matches decides the length.
    /// An inverse compare consumes one byte when no entry matches.
    fn compare(&self, ip: usize, cmp: Compare<'_>, rest: &[u8]) -> Option<usize> {
        if cmp.is_inverse() {
            rest.first()?;
            let hit = cmp
                .entries()
                .skip(1)
                .any(|entry| self.entry_len(ip, entry, rest).is_some());
            return (!hit).then_some(1);
        }
        cmp.entries().find_map(|entry| self.entry_len(ip, entry, rest))
    }

    fn entry_len(&self, ip: usize, entry: CompareEntry, rest: &[u8]) -> Option<usize> {
        let first = rest.first().copied();
        match entry {
            CompareEntry::Inverse => {
                panic!("malformed bytecode at {ip}: inverse is not the first entry")
            }
            CompareEntry::AnyChar => first.map(|_| 1),
            CompareEntry::Char(c) => (first == Some(c)).then_some(1),
            CompareEntry::String(r) => {
                let Some(literal) = self.program.literal(r) else {
                    panic!("malformed bytecode at {ip}: literal outside the pool");
                };
                rest.starts_with(literal).then_some(literal.len())
            }
            CompareEntry::CharClass(class) => first.filter(|&b| class.matches(b)).map(|_| 1),
            CompareEntry::CharRange(range) => first.filter(|&b| range.contains(b)).map(|_| 1),
        }
    }

    fn decode(&self, ip: usize) -> Instruction<'p> {
        match self.program.decode(ip) {
            Ok(instr) => instr,
            Err(e) => panic!("malformed bytecode: {e}"),
        }
    }

    fn target(&self, ip: usize, instr: &Instruction<'_>) -> usize {
        match instr.jump_target(ip) {
            Some(target) => target,
            None => panic!("malformed bytecode at {ip}: jump before the program start"),
        }
    }

    fn named_slot(&self, ip: usize, name: LiteralRef) -> usize {
        match self.program.named_group_slot(name) {
            Some(index) => index,
            None => panic!("malformed bytecode at {ip}: unknown group name"),
        }
    }
}

/// Options `search` runs with: `GLOBAL` set, and the begin/end-of-line
/// exclusions dropped when both are given.
pub fn search_options(options: RegexOptions) -> RegexOptions {
    let both = RegexOptions::MATCH_NOT_BEGIN_OF_LINE | RegexOptions::MATCH_NOT_END_OF_LINE;
    let options = if options.contains(both) {
        options.without(both)
    } else {
        options
    };
    options | RegexOptions::GLOBAL
}

fn backtrack<T: Tracer>(forks: &mut ForkStack, tracer: &mut T) -> Option<MatchState> {
    let resumed = forks.pop()?;
    tracer.trace_backtrack(resumed.ip, resumed.sp);
    Some(resumed)
}

/// Replace `best` when `state` ends further right; earlier paths win ties.
fn keep_longest(best: &mut Option<MatchState>, state: MatchState) {
    if best.as_ref().is_none_or(|b| state.sp > b.sp) {
        *best = Some(state);
    }
}

fn slot(slots: &mut [GroupSlot], index: usize, ip: usize) -> &mut GroupSlot {
    match slots.get_mut(index) {
        Some(slot) => slot,
        None => panic!("malformed bytecode at {ip}: group {index} out of range"),
    }
}
