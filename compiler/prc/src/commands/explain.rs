//! `prc explain <code>`.

use pr_diagnostic::ErrorCode;

/// Long-form text for an error code, e.g. `E1001` or `e1001`.
pub fn explanation(code_str: &str) -> Option<String> {
    let code: ErrorCode = code_str.parse().ok()?;
    Some(format!("{code}: {}", code.description()))
}

pub fn explain_error(code_str: &str) {
    let Some(text) = explanation(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E2101");
        std::process::exit(1);
    };
    println!("{text}");
}
