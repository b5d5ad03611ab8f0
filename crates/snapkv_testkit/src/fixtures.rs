//! Test fixtures and engine helpers.

use snapkv_core::{CommandRegistry, CoreResult, Dispatcher, Engine};

/// Creates an engine pre-populated with `pairs` and no open transactions.
pub fn engine_with(pairs: &[(&str, &str)]) -> Engine {
    let mut engine = Engine::new();
    for (k, v) in pairs {
        engine.store_mut().set(*k, *v);
    }
    engine
}

/// Runs `lines` against `engine`, collecting what each line printed.
///
/// Blank lines and silent commands yield `Ok(None)`.
pub fn run_lines<I, S>(engine: &mut Engine, lines: I) -> Vec<CoreResult<Option<String>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let registry = CommandRegistry::builtin();
    let dispatcher = Dispatcher::new(&registry);
    lines
        .into_iter()
        .map(|line| {
            dispatcher
                .dispatch_line(line.as_ref(), engine)
                .map(|out| out.and_then(|o| o.render()))
        })
        .collect()
}

/// Runs a script on a fresh engine and returns only the printed lines.
///
/// # Panics
///
/// Panics if any line is rejected.
pub fn transcript(script: &str) -> Vec<String> {
    let mut engine = Engine::new();
    run_lines(&mut engine, script.lines())
        .into_iter()
        .filter_map(|r| r.expect("script line rejected"))
        .collect()
}
