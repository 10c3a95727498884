//! Tracing infrastructure for debugging VM execution.
//!
//! The VM is generic over [`Tracer`]. With [`NoopTracer`] every hook is an
//! empty `#[inline(always)]` function and the calls compile away, so the
//! untraced matcher pays nothing for instrumentation.
//!
//! Tracing-only state (the fork origins shown on backtrack lines) lives in
//! the tracer, not in `MatchState`.

use eregex_bytecode::{Colors, Instruction, Program, format_instruction, width_for_count};

use super::result::Match;

/// Hooks called by the VM at fixed points during execution.
pub trait Tracer {
    /// A new attempt starts at subject position `start`.
    fn trace_attempt(&mut self, start: usize);

    /// Before executing the instruction at `ip` with the subject at `sp`.
    fn trace_instruction(&mut self, ip: usize, sp: usize, instr: &Instruction<'_>);

    /// A fork deferred the alternative resuming at `deferred_ip`.
    fn trace_fork(&mut self, deferred_ip: usize);

    /// The current path died at `sp` (compare or anchor check failed).
    fn trace_fail(&mut self, sp: usize);

    /// Execution resumed from the deferred alternative at `ip`, `sp`.
    fn trace_backtrack(&mut self, ip: usize, sp: usize);

    /// A path reached `Exit` while alternatives were still pending and the
    /// policy asked to keep looking.
    fn trace_candidate(&mut self, span: Match);

    /// The attempt produced `span`.
    fn trace_accept(&mut self, span: Match);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_attempt(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_instruction(&mut self, _ip: usize, _sp: usize, _instr: &Instruction<'_>) {}

    #[inline(always)]
    fn trace_fork(&mut self, _deferred_ip: usize) {}

    #[inline(always)]
    fn trace_fail(&mut self, _sp: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _ip: usize, _sp: usize) {}

    #[inline(always)]
    fn trace_candidate(&mut self, _span: Match) {}

    #[inline(always)]
    fn trace_accept(&mut self, _span: Match) {}
}

/// Tracer that collects one line per event.
///
/// ```text
/// attempt @0
///   00  sp=0  ForkJump     +7 [&09]
///       fork  &09
///   02  sp=0  Compare      char 'a'
///       fail  sp=0
///       back  &09 sp=0
///   09  sp=0  Compare      char 'b'
///   14  sp=1  Exit
/// match 0..1
/// ```
pub struct PrintTracer<'p> {
    program: &'p Program,
    /// Collected trace lines.
    lines: Vec<String>,
    ip_width: usize,
    colors: Colors,
}

impl<'p> PrintTracer<'p> {
    pub fn new(program: &'p Program, colors: Colors) -> Self {
        Self {
            program,
            lines: Vec::new(),
            ip_width: width_for_count(program.len()).max(2),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print all collected lines to stdout.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    /// A line in the sub-event column, under the instruction text.
    fn add_subline(&mut self, content: String) {
        let indent = 2 + self.ip_width + 2;
        self.lines.push(format!("{:indent$}{content}", ""));
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_attempt(&mut self, start: usize) {
        let c = self.colors;
        self.lines.push(format!("{}attempt @{start}{}", c.blue, c.reset));
    }

    fn trace_instruction(&mut self, ip: usize, sp: usize, instr: &Instruction<'_>) {
        let c = self.colors;
        let w = self.ip_width;
        let content = format_instruction(self.program, ip, instr, c);
        let sp = format!("sp={sp}");
        self.lines
            .push(format!("  {}{ip:0w$}{}  {sp:<5} {content}", c.dim, c.reset));
    }

    fn trace_fork(&mut self, deferred_ip: usize) {
        let c = self.colors;
        let w = self.ip_width;
        self.add_subline(format!("fork  {}&{deferred_ip:0w$}{}", c.dim, c.reset));
    }

    fn trace_fail(&mut self, sp: usize) {
        let c = self.colors;
        self.add_subline(format!("{}fail{}  sp={sp}", c.red, c.reset));
    }

    fn trace_backtrack(&mut self, ip: usize, sp: usize) {
        let c = self.colors;
        let w = self.ip_width;
        self.add_subline(format!("back  {}&{ip:0w$}{} sp={sp}", c.dim, c.reset));
    }

    fn trace_candidate(&mut self, span: Match) {
        let c = self.colors;
        self.add_subline(format!(
            "{}candidate{} {}..{}",
            c.green, c.reset, span.start, span.end
        ));
    }

    fn trace_accept(&mut self, span: Match) {
        let c = self.colors;
        self.lines.push(format!(
            "{}match {}..{}{}",
            c.green, span.start, span.end, c.reset
        ));
    }
}
