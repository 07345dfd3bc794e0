//! `printf`-like formatter
//!
//! Scans a format string, substituting one argument per recognized
//! specifier. Unsupported modifiers and exhausted specifiers pass through
//! literally rather than erroring — only a warning is raised.

fn is_recognized_specifier(c: char) -> bool {
    matches!(c, 'd' | 'i' | 'u' | 'x' | 'X' | 'c')
}

/// Render `format` against `args`, returning the rendered text plus any
/// non-fatal warnings (missing/extra arguments, unrepresentable `%c`).
pub fn render(format: &str, args: &[i64]) -> (String, Vec<String>) {
    let mut output = String::with_capacity(format.len());
    let mut warnings = Vec::new();
    let mut arg_index = 0;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }

        match chars.peek().copied() {
            None => output.push('%'),
            Some('%') => {
                chars.next();
                output.push('%');
            }
            Some(spec) if is_recognized_specifier(spec) => {
                chars.next();
                if arg_index < args.len() {
                    render_specifier(spec, args[arg_index], &mut output);
                    arg_index += 1;
                } else {
                    // Not enough arguments: emit the specifier literally and warn.
                    output.push('%');
                    output.push(spec);
                    warnings.push("printf: expected more arguments than were provided".to_string());
                }
            }
            Some(other) => {
                // Width/precision/padding/length modifiers: unsupported, pass through.
                chars.next();
                output.push('%');
                output.push(other);
            }
        }
    }

    if arg_index < args.len() {
        warnings.push("printf: more arguments were provided than consumed".to_string());
    }

    (output, warnings)
}

fn render_specifier(spec: char, value: i64, output: &mut String) {
    match spec {
        'd' | 'i' => output.push_str(&value.to_string()),
        'u' => output.push_str(&(value as u32).to_string()),
        'x' => output.push_str(&format!("{:x}", value as u32)),
        'X' => output.push_str(&format!("{:X}", value as u32)),
        // Every `u8` is a valid Latin-1 scalar value, so this never fails.
        'c' => output.push(char::from(value as u8)),
        _ => unreachable!("render_specifier called with an unrecognized specifier"),
    }
}
