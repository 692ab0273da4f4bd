use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", kb_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kb_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    let max_results = s
        .suggestions
        .max_results
        .map_or_else(|| "unlimited".to_string(), |n| n.to_string());
    println!(
        "OK: suggestions.max_results={}, suggestions.min_prefix_chars={}, session.append_space_on_accept={}",
        max_results, s.suggestions.min_prefix_chars, s.session.append_space_on_accept
    );
}
